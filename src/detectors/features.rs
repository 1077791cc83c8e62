use crate::config::GapThresholds;
use crate::content::WebsiteContent;
use crate::detectors::GapDetector;
use crate::filter::PagePatterns;
use crate::gaps::{ContentGap, ContentType, GapTemplate, GapType, Level, Severity};

/// Detects missing conversion features and thinner content
#[derive(Debug, Clone, Default)]
pub struct FeatureGapDetector {
    patterns: PagePatterns,
    thresholds: GapThresholds,
}

impl FeatureGapDetector {
    pub fn new(patterns: PagePatterns, thresholds: GapThresholds) -> Self {
        Self {
            patterns,
            thresholds,
        }
    }

    fn booking_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        if self.patterns.find_booking_page(target).is_some() {
            return None;
        }
        let example = self.patterns.find_booking_page(competitor)?;

        Some(
            ContentGap::new(
                GapTemplate::BookingSystem,
                GapType::Structural,
                Severity::Significant,
                ContentType::UserExperience,
                Level::High,
                Level::Medium,
            )
            .with_text(
                "Missing Online Booking or Quote System",
                format!(
                    "{} lets visitors book an appointment or request a quote online; your site has no such path.",
                    name
                ),
                "Add an online booking or quote request form and link it from every service page.",
            )
            .with_competitor(name)
            .with_example_url(Some(&example.url)),
        )
    }

    fn depth_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        let target_avg = target.average_word_count();
        let competitor_avg = competitor.average_word_count();

        if competitor_avg <= target_avg * self.thresholds.content_depth_ratio {
            return None;
        }

        Some(
            ContentGap::new(
                GapTemplate::ContentDepth,
                GapType::Thematic,
                Severity::Moderate,
                ContentType::WebsiteContent,
                Level::Medium,
                Level::High,
            )
            .with_text(
                "Thinner Content Than Competitor",
                format!(
                    "{} averages {:.0} words per page compared to your {:.0}.",
                    name, competitor_avg, target_avg
                ),
                "Expand key pages with detailed explanations, examples and answers to customer questions.",
            )
            .with_competitor(name)
            .with_example_url(competitor.longest_page().map(|p| p.url.as_str())),
        )
    }
}

impl GapDetector for FeatureGapDetector {
    fn name(&self) -> &'static str {
        "features"
    }

    fn detect(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        competitor_name: &str,
    ) -> Vec<ContentGap> {
        let gaps: Vec<ContentGap> = [
            self.booking_gap(target, competitor, competitor_name),
            self.depth_gap(target, competitor, competitor_name),
        ]
        .into_iter()
        .flatten()
        .collect();

        ::log::debug!(
            "Feature checks against {} found {} gaps",
            competitor_name,
            gaps.len()
        );
        gaps
    }
}

/// Feature gaps using the default patterns and thresholds
pub fn find_feature_gaps(
    target: &WebsiteContent,
    competitor: &WebsiteContent,
    competitor_name: &str,
) -> Vec<ContentGap> {
    FeatureGapDetector::default().detect(target, competitor, competitor_name)
}
