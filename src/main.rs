use clap::Parser;
use content_gap::{GapAnalyzer, GapReport, WebsiteContent, merge_gaps};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

mod args;
use args::Args;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Content gap analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<String, BoxError> {
    args.check_names()?;

    let analyzer = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            GapAnalyzer::new().with_config_file(path)?
        }
        None => GapAnalyzer::new(),
    };

    let target = Arc::new(load_snapshot(args.target.clone()).await?);
    let competitors = load_snapshots(&args.competitors).await?;
    ::log::info!(
        "Loaded target {} and {} competitors",
        target.url,
        competitors.len()
    );

    let target_name = args.target_name.clone().unwrap_or_else(|| target.url.clone());
    let names: Vec<String> = if args.competitor_names.is_empty() {
        competitors.iter().map(|c| c.url.clone()).collect()
    } else {
        args.competitor_names.clone()
    };

    // Pairwise comparisons are independent; merge once all are done
    let analyzer = Arc::new(analyzer);
    let mut tasks = JoinSet::new();
    for (index, (name, competitor)) in names.iter().cloned().zip(competitors).enumerate() {
        let analyzer = Arc::clone(&analyzer);
        let target = Arc::clone(&target);
        let target_name = target_name.clone();
        tasks.spawn_blocking(move || {
            let gaps = analyzer.compare_websites(&target, &competitor, &target_name, &name);
            (index, gaps)
        });
    }

    let mut runs = Vec::with_capacity(names.len());
    while let Some(result) = tasks.join_next().await {
        runs.push(result?);
    }
    runs.sort_by_key(|(index, _)| *index);

    let gaps = merge_gaps(runs.into_iter().map(|(_, gaps)| gaps));
    let report = GapReport::build(&analyzer, &target, &target_name, names, gaps);
    ::log::info!(
        "Found {} gaps ({} critical)",
        report.summary.total_gaps,
        report.summary.critical_gaps
    );

    Ok(report.to_json(args.pretty)?)
}

async fn load_snapshot(path: PathBuf) -> Result<WebsiteContent, BoxError> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let content = WebsiteContent::from_json(&contents)
        .map_err(|e| format!("Invalid snapshot {}: {}", path.display(), e))?;
    ::log::debug!("Loaded {} pages from {}", content.pages.len(), path.display());
    Ok(content)
}

/// Read competitor snapshots concurrently, keeping argument order
async fn load_snapshots(paths: &[PathBuf]) -> Result<Vec<WebsiteContent>, BoxError> {
    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        tasks.spawn(async move { (index, load_snapshot(path).await) });
    }

    let mut loaded = Vec::with_capacity(paths.len());
    while let Some(result) = tasks.join_next().await {
        let (index, content) = result?;
        loaded.push((index, content?));
    }
    loaded.sort_by_key(|(index, _)| *index);

    Ok(loaded.into_iter().map(|(_, content)| content).collect())
}
