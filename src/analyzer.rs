use crate::config::AnalysisConfig;
use crate::content::WebsiteContent;
use crate::detectors::{FeatureGapDetector, GapDetector, StructuralGapDetector, TopicGapDetector};
use crate::error::Result;
use crate::filter::PagePatterns;
use crate::gaps::ContentGap;
use crate::report::GapReport;
use std::path::Path;

/// Runs every detector over a target/competitor pair
pub struct GapAnalyzer {
    config: AnalysisConfig,
    patterns: PagePatterns,
    detectors: Vec<Box<dyn GapDetector>>,
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::from_parts(AnalysisConfig::default(), PagePatterns::default())
    }
}

impl GapAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration, compiling its patterns
    pub fn with_config(self, config: AnalysisConfig) -> Result<Self> {
        let patterns = PagePatterns::new(&config.patterns)?;
        Ok(Self::from_parts(config, patterns))
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let config = AnalysisConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = AnalysisConfig::from_json(json)?;
        self.with_config(config)
    }

    /// Detectors run in this order: structural, topics, features
    fn from_parts(config: AnalysisConfig, patterns: PagePatterns) -> Self {
        let thresholds = config.thresholds.clone();
        let detectors: Vec<Box<dyn GapDetector>> = vec![
            Box::new(StructuralGapDetector::new(patterns.clone(), thresholds.clone())),
            Box::new(TopicGapDetector::new(thresholds.clone())),
            Box::new(FeatureGapDetector::new(patterns.clone(), thresholds)),
        ];

        Self {
            config,
            patterns,
            detectors,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn patterns(&self) -> &PagePatterns {
        &self.patterns
    }

    /// Compare the target against one competitor.
    ///
    /// Gaps come back structural first, then topics, then features.
    pub fn compare_websites(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        target_name: &str,
        competitor_name: &str,
    ) -> Vec<ContentGap> {
        let gaps: Vec<ContentGap> = self
            .detectors
            .iter()
            .flat_map(|detector| {
                let found = detector.detect(target, competitor, competitor_name);
                ::log::debug!("Detector '{}' found {} gaps", detector.name(), found.len());
                found
            })
            .collect();

        ::log::info!(
            "Compared {} ({} pages) against {} ({} pages): {} gaps",
            target_name,
            target.pages.len(),
            competitor_name,
            competitor.pages.len(),
            gaps.len()
        );
        gaps
    }

    /// Compare the target against several competitors and merge the results.
    ///
    /// A gap found for more than one competitor is reported once, in the
    /// position of its first occurrence, listing every competitor.
    pub fn compare_with_competitors(
        &self,
        target: &WebsiteContent,
        target_name: &str,
        competitors: &[(String, WebsiteContent)],
    ) -> Vec<ContentGap> {
        let runs = competitors
            .iter()
            .map(|(name, competitor)| self.compare_websites(target, competitor, target_name, name));
        merge_gaps(runs)
    }

    /// Compare against every competitor and assemble the full report
    pub fn report(
        &self,
        target: &WebsiteContent,
        target_name: &str,
        competitors: &[(String, WebsiteContent)],
    ) -> GapReport {
        let gaps = self.compare_with_competitors(target, target_name, competitors);
        let names = competitors.iter().map(|(name, _)| name.clone()).collect();
        GapReport::build(self, target, target_name, names, gaps)
    }
}

/// Merge per-competitor gap lists, collapsing gaps that describe the same
/// difference into their first occurrence
pub fn merge_gaps<I>(runs: I) -> Vec<ContentGap>
where
    I: IntoIterator<Item = Vec<ContentGap>>,
{
    let mut merged: Vec<ContentGap> = Vec::new();

    for gap in runs.into_iter().flatten() {
        match merged.iter_mut().find(|existing| existing.same_gap(&gap)) {
            Some(existing) => {
                for name in &gap.competitors_have_this {
                    existing.add_competitor(name);
                }
            }
            None => merged.push(gap),
        }
    }

    merged
}

/// Compare with the default configuration
pub fn compare_websites(
    target: &WebsiteContent,
    competitor: &WebsiteContent,
    target_name: &str,
    competitor_name: &str,
) -> Vec<ContentGap> {
    GapAnalyzer::default().compare_websites(target, competitor, target_name, competitor_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Page, SiteMetadata};
    use crate::error::GapError;
    use crate::gaps::{GapTemplate, Level, Severity};

    fn page(url: &str) -> Page {
        Page::new(url, "").unwrap()
    }

    fn target_site() -> WebsiteContent {
        let pages = (0..5)
            .map(|i| {
                page(&format!("https://target.test/page-{}", i))
                    .with_topics(["roofing", "gutters"])
                    .with_word_count(600)
            })
            .collect();
        WebsiteContent::new("https://target.test", pages, SiteMetadata::default()).unwrap()
    }

    fn competitor_site() -> WebsiteContent {
        let mut pages: Vec<Page> = (0..5)
            .map(|i| {
                page(&format!("https://rival.test/page-{}", i))
                    .with_topics(["roofing", "gutters"])
                    .with_word_count(600)
            })
            .collect();
        pages.push(
            page("https://rival.test/faq")
                .with_faq(true)
                .with_topics(["roofing"])
                .with_word_count(600),
        );
        WebsiteContent::new("https://rival.test", pages, SiteMetadata { has_schema: true })
            .unwrap()
    }

    #[test]
    fn test_faq_and_schema_scenario() {
        let gaps = compare_websites(&target_site(), &competitor_site(), "Target", "Rival");
        assert_eq!(gaps.len(), 2);

        assert_eq!(gaps[0].template_id, GapTemplate::FaqPage);
        assert_eq!(gaps[0].severity, Severity::Significant);

        assert_eq!(gaps[1].template_id, GapTemplate::SchemaMarkup);
        assert_eq!(gaps[1].severity, Severity::Critical);
        assert_eq!(gaps[1].estimated_effort, Level::Low);
    }

    #[test]
    fn test_deterministic() {
        let target = target_site();
        let mut competitor = competitor_site();
        competitor.pages.push(
            page("https://rival.test/services/siding")
                .with_topics(["siding", "decking"])
                .with_word_count(3000),
        );
        competitor.pages.push(
            page("https://rival.test/decking")
                .with_topics(["decking", "siding"])
                .with_reviews(true),
        );

        let first = compare_websites(&target, &competitor, "Target", "Rival");
        let second = compare_websites(&target, &competitor, "Target", "Rival");
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_parity_yields_nothing() {
        let target = target_site();
        let mut twin = target.clone();
        twin.url = "https://twin.test".to_string();

        assert!(compare_websites(&target, &twin, "Target", "Twin").is_empty());
    }

    #[test]
    fn test_empty_sites_yield_nothing() {
        let empty = WebsiteContent::new("https://a.test", Vec::new(), SiteMetadata::default())
            .unwrap();
        assert!(compare_websites(&empty, &empty, "A", "A").is_empty());
    }

    #[test]
    fn test_merge_across_competitors() {
        let analyzer = GapAnalyzer::new();
        let competitors = vec![
            ("Rival".to_string(), competitor_site()),
            ("Other".to_string(), competitor_site()),
        ];

        let gaps = analyzer.compare_with_competitors(&target_site(), "Target", &competitors);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].competitors_have_this, vec!["Rival", "Other"]);
        assert_eq!(gaps[1].competitors_have_this, vec!["Rival", "Other"]);
    }

    #[test]
    fn test_merge_keeps_distinct_gaps() {
        let mut other = WebsiteContent::new("https://other.test", Vec::new(), SiteMetadata::default())
            .unwrap();
        other.pages.push(page("https://other.test/how-it-works"));

        let competitors = vec![
            ("Rival".to_string(), competitor_site()),
            ("Other".to_string(), other),
        ];
        let gaps = GapAnalyzer::new().compare_with_competitors(&target_site(), "Target", &competitors);

        let templates: Vec<_> = gaps.iter().map(|g| g.template_id).collect();
        assert_eq!(
            templates,
            vec![
                GapTemplate::FaqPage,
                GapTemplate::SchemaMarkup,
                GapTemplate::ProcessPage,
            ]
        );
        assert_eq!(gaps[2].competitors_have_this, vec!["Other"]);
    }

    #[test]
    fn test_report() {
        let competitors = vec![("Rival".to_string(), competitor_site())];
        let report = GapAnalyzer::new().report(&target_site(), "Target", &competitors);

        assert_eq!(report.target_url, "https://target.test");
        assert_eq!(report.competitors, vec!["Rival"]);
        assert_eq!(report.summary.total_gaps, 2);
        assert_eq!(report.timeline.immediate.len(), 1);
        assert_eq!(report.timeline.immediate[0].template_id, GapTemplate::SchemaMarkup);
        assert_eq!(report.timeline.short_term.len(), 1);
        assert_eq!(report.timeline.short_term[0].template_id, GapTemplate::FaqPage);
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(report.recommendations[1].priority, Level::High);

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
        assert_eq!(json["gaps"][1]["estimated_effort"], "low");
        assert_eq!(json["summary"]["critical_gaps"], 1);
    }

    #[test]
    fn test_with_config_str() {
        let analyzer = GapAnalyzer::new()
            .with_config_str(r#"{"thresholds": {"max_topic_gaps": 1}}"#)
            .unwrap();
        assert_eq!(analyzer.config().thresholds.max_topic_gaps, 1);

        let result = GapAnalyzer::new().with_config_str(r#"{"patterns": {"faq": "["}}"#);
        assert!(matches!(result, Err(GapError::InvalidPattern { name: "faq", .. })));
    }
}
