pub mod recommendations;
pub mod summary;
pub mod timeline;

pub use recommendations::{Recommendation, generate_recommendations};
pub use summary::{ComparisonSummary, generate_summary};
pub use timeline::{ImplementationTimeline, generate_implementation_timeline};

use crate::analyzer::GapAnalyzer;
use crate::content::WebsiteContent;
use crate::error::Result;
use crate::gaps::ContentGap;
use serde::{Deserialize, Serialize};

/// Everything a comparison produces, ready to store or render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub target_name: String,
    pub target_url: String,
    pub competitors: Vec<String>,
    pub gaps: Vec<ContentGap>,
    pub summary: ComparisonSummary,
    pub timeline: ImplementationTimeline,
    pub recommendations: Vec<Recommendation>,
}

impl GapReport {
    /// Assemble a report from gaps already detected for `target`
    pub fn build(
        analyzer: &GapAnalyzer,
        target: &WebsiteContent,
        target_name: &str,
        competitors: Vec<String>,
        gaps: Vec<ContentGap>,
    ) -> Self {
        let config = &analyzer.config().report;

        Self {
            target_name: target_name.to_string(),
            target_url: target.url.clone(),
            competitors,
            summary: summary::summarize(target, &gaps, analyzer.patterns(), config),
            timeline: timeline::build_timeline(&gaps, config),
            recommendations: generate_recommendations(&gaps),
            gaps,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
