use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "content-gap")]
#[command(about = "Find content gaps between a website and its competitors")]
#[command(version)]
pub struct Args {
    /// JSON snapshot of the target website
    pub target: PathBuf,

    /// JSON snapshots of competitor websites
    #[arg(required = true)]
    pub competitors: Vec<PathBuf>,

    /// Display name for the target (defaults to its site URL)
    #[arg(long)]
    pub target_name: Option<String>,

    /// Display name per competitor, in the same order as the snapshots
    #[arg(long = "competitor-name")]
    pub competitor_names: Vec<String>,

    /// Path to a JSON analysis configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Competitor names must be given for all competitors or for none
    pub fn check_names(&self) -> content_gap::Result<()> {
        if !self.competitor_names.is_empty() && self.competitor_names.len() != self.competitors.len()
        {
            return Err(content_gap::GapError::NameCountMismatch {
                names: self.competitor_names.len(),
                competitors: self.competitors.len(),
            });
        }
        Ok(())
    }
}
