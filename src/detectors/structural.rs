use crate::config::GapThresholds;
use crate::content::WebsiteContent;
use crate::detectors::GapDetector;
use crate::filter::PagePatterns;
use crate::gaps::{ContentGap, ContentType, GapTemplate, GapType, Level, Severity};

/// Detects whole page categories or site capabilities the target lacks
#[derive(Debug, Clone, Default)]
pub struct StructuralGapDetector {
    patterns: PagePatterns,
    thresholds: GapThresholds,
}

impl StructuralGapDetector {
    pub fn new(patterns: PagePatterns, thresholds: GapThresholds) -> Self {
        Self {
            patterns,
            thresholds,
        }
    }

    fn faq_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        if self.patterns.find_faq_page(target).is_some() {
            return None;
        }
        let example = self.patterns.find_faq_page(competitor)?;

        Some(
            ContentGap::new(
                GapTemplate::FaqPage,
                GapType::Structural,
                Severity::Significant,
                ContentType::TrustBuilding,
                Level::High,
                Level::Medium,
            )
            .with_text(
                "Missing FAQ Page",
                format!(
                    "{} answers common customer questions on a dedicated FAQ page; your site has none.",
                    name
                ),
                "Create an FAQ page covering pricing, timelines, service areas and common objections.",
            )
            .with_competitor(name)
            .with_example_url(Some(&example.url)),
        )
    }

    fn process_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        if self.patterns.find_process_page(target).is_some() {
            return None;
        }
        let example = self.patterns.find_process_page(competitor)?;

        Some(
            ContentGap::new(
                GapTemplate::ProcessPage,
                GapType::Structural,
                Severity::Critical,
                ContentType::ServicePages,
                Level::High,
                Level::Medium,
            )
            .with_text(
                "Missing Process Explanation",
                format!(
                    "{} explains step by step how working with them goes; your site does not describe your process.",
                    name
                ),
                "Publish a \"How It Works\" page walking customers through each step from first contact to completion.",
            )
            .with_competitor(name)
            .with_example_url(Some(&example.url)),
        )
    }

    fn schema_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        if target.metadata.has_schema || !competitor.metadata.has_schema {
            return None;
        }

        Some(
            ContentGap::new(
                GapTemplate::SchemaMarkup,
                GapType::Structural,
                Severity::Critical,
                ContentType::TechnicalSeo,
                Level::High,
                Level::Low,
            )
            .with_text(
                "Missing Schema Markup",
                format!(
                    "{} uses structured data so search engines understand its business; your site has no schema markup.",
                    name
                ),
                "Add LocalBusiness, Service and FAQ schema markup to the site.",
            )
            .with_competitor(name)
            .with_example_url(Some(&competitor.url)),
        )
    }

    fn reviews_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        if target.has_review_page() {
            return None;
        }
        let example = competitor.pages.iter().find(|p| p.has_reviews)?;

        Some(
            ContentGap::new(
                GapTemplate::Reviews,
                GapType::Structural,
                Severity::Significant,
                ContentType::TrustBuilding,
                Level::High,
                Level::Low,
            )
            .with_text(
                "Missing Reviews and Testimonials",
                format!(
                    "{} shows customer reviews or testimonials; your site shows no social proof.",
                    name
                ),
                "Add customer reviews and testimonials to key pages, or embed a reviews widget.",
            )
            .with_competitor(name)
            .with_example_url(Some(&example.url)),
        )
    }

    fn service_depth_gap(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        name: &str,
    ) -> Option<ContentGap> {
        let target_services = self.patterns.service_pages(target);
        let competitor_services = self.patterns.service_pages(competitor);

        let allowed = target_services
            .len()
            .saturating_add(self.thresholds.service_page_margin);
        if competitor_services.len() <= allowed {
            return None;
        }

        Some(
            ContentGap::new(
                GapTemplate::ServicePages,
                GapType::Structural,
                Severity::Significant,
                ContentType::ServicePages,
                Level::Medium,
                Level::High,
            )
            .with_text(
                "Fewer Dedicated Service Pages",
                format!(
                    "{} has {} dedicated service pages compared to your {}.",
                    name,
                    competitor_services.len(),
                    target_services.len()
                ),
                "Create a dedicated page for each core service with its own description, pricing cues and call to action.",
            )
            .with_competitor(name)
            .with_example_url(competitor_services.first().map(|p| p.url.as_str())),
        )
    }
}

impl GapDetector for StructuralGapDetector {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn detect(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        competitor_name: &str,
    ) -> Vec<ContentGap> {
        // Every check runs; each one contributes at most one gap
        let gaps: Vec<ContentGap> = [
            self.faq_gap(target, competitor, competitor_name),
            self.process_gap(target, competitor, competitor_name),
            self.schema_gap(target, competitor, competitor_name),
            self.reviews_gap(target, competitor, competitor_name),
            self.service_depth_gap(target, competitor, competitor_name),
        ]
        .into_iter()
        .flatten()
        .collect();

        ::log::debug!(
            "Structural checks against {} found {} gaps",
            competitor_name,
            gaps.len()
        );
        gaps
    }
}

/// Structural gaps using the default patterns and thresholds
pub fn find_structural_gaps(
    target: &WebsiteContent,
    competitor: &WebsiteContent,
    competitor_name: &str,
) -> Vec<ContentGap> {
    StructuralGapDetector::default().detect(target, competitor, competitor_name)
}
