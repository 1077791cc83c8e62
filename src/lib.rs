//! Website content gap analysis.
//!
//! Compares a target site's [`WebsiteContent`] with competitor snapshots and
//! reports the differences as [`ContentGap`]s, then turns them into a summary,
//! a phased timeline and per-gap recommendations.
//!
//! ```no_run
//! use content_gap::{GapAnalyzer, WebsiteContent};
//!
//! # fn main() -> content_gap::Result<()> {
//! let target = WebsiteContent::from_file("target.json")?;
//! let rival = WebsiteContent::from_file("rival.json")?;
//!
//! let analyzer = GapAnalyzer::new();
//! let report = analyzer.report(&target, "Our Site", &[("Rival".to_string(), rival)]);
//! println!("{}", report.to_json(true)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod content;
pub mod detectors;
pub mod error;
pub mod filter;
pub mod gaps;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use analyzer::{GapAnalyzer, compare_websites, merge_gaps};
pub use config::AnalysisConfig;
pub use content::{Page, SiteMetadata, WebsiteContent};
pub use detectors::{find_feature_gaps, find_structural_gaps, find_topic_gaps};
pub use error::{GapError, Result};
pub use gaps::{ContentGap, ContentType, GapTemplate, GapType, Level, Severity};
pub use report::{
    ComparisonSummary, GapReport, ImplementationTimeline, Recommendation,
    generate_implementation_timeline, generate_recommendations, generate_summary,
};
