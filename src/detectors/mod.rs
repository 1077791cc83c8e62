pub mod features;
pub mod structural;
pub mod topics;

#[cfg(test)]
mod tests;

use crate::content::WebsiteContent;
use crate::gaps::ContentGap;

pub use features::{FeatureGapDetector, find_feature_gaps};
pub use structural::{StructuralGapDetector, find_structural_gaps};
pub use topics::{TopicGapDetector, find_topic_gaps};

/// A single pairwise check between a target site and one competitor.
///
/// Implementations are pure: the same inputs always yield the same gaps in
/// the same order, and an empty site is valid input.
pub trait GapDetector: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Detect gaps the competitor exposes in the target
    fn detect(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        competitor_name: &str,
    ) -> Vec<ContentGap>;
}
