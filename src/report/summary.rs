use crate::config::ReportConfig;
use crate::content::WebsiteContent;
use crate::filter::PagePatterns;
use crate::gaps::{ContentGap, Severity};
use serde::{Deserialize, Serialize};

/// Aggregate view over a gap list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total_gaps: usize,
    pub critical_gaps: usize,
    pub significant_gaps: usize,
    pub moderate_gaps: usize,
    pub target_strengths: Vec<String>,
    pub target_weaknesses: Vec<String>,
}

/// Summarize gaps and the target's own strengths.
///
/// Strengths look only at the target; weaknesses are the titles of the
/// critical and significant gaps in emission order.
pub fn summarize(
    target: &WebsiteContent,
    gaps: &[ContentGap],
    patterns: &PagePatterns,
    config: &ReportConfig,
) -> ComparisonSummary {
    let count = |severity: Severity| gaps.iter().filter(|g| g.severity == severity).count();

    ComparisonSummary {
        total_gaps: gaps.len(),
        critical_gaps: count(Severity::Critical),
        significant_gaps: count(Severity::Significant),
        moderate_gaps: count(Severity::Moderate),
        target_strengths: target_strengths(target, patterns, config),
        target_weaknesses: gaps
            .iter()
            .filter(|g| g.is_pressing())
            .take(config.max_weaknesses)
            .map(|g| g.gap_title.clone())
            .collect(),
    }
}

fn target_strengths(
    target: &WebsiteContent,
    patterns: &PagePatterns,
    config: &ReportConfig,
) -> Vec<String> {
    let mut strengths = Vec::new();

    // Flag or URL match, as in the structural detector
    if patterns.find_faq_page(target).is_some() {
        strengths.push("Has an FAQ page answering customer questions".to_string());
    }
    if patterns.find_process_page(target).is_some() {
        strengths.push("Explains the service process".to_string());
    }
    if target.metadata.has_schema {
        strengths.push("Uses schema markup".to_string());
    }
    if target.has_review_page() {
        strengths.push("Displays customer reviews and testimonials".to_string());
    }
    if target.pages.len() > config.strength_page_count {
        strengths.push(format!(
            "Substantial content library ({} pages)",
            target.pages.len()
        ));
    }

    strengths
}

/// Summary with the default patterns and caps
pub fn generate_summary(target: &WebsiteContent, gaps: &[ContentGap]) -> ComparisonSummary {
    summarize(
        target,
        gaps,
        &PagePatterns::default(),
        &ReportConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Page, SiteMetadata};
    use crate::gaps::{ContentType, GapTemplate, GapType, Level};

    fn gap(title: &str, severity: Severity) -> ContentGap {
        ContentGap::new(
            GapTemplate::TopicCoverage,
            GapType::Structural,
            severity,
            ContentType::WebsiteContent,
            Level::Medium,
            Level::Medium,
        )
        .with_text(title, "", "")
    }

    fn site(pages: Vec<Page>, has_schema: bool) -> WebsiteContent {
        WebsiteContent::new("https://target.test", pages, SiteMetadata { has_schema }).unwrap()
    }

    #[test]
    fn test_counts_by_severity() {
        let gaps = vec![
            gap("a", Severity::Critical),
            gap("b", Severity::Moderate),
            gap("c", Severity::Significant),
            gap("d", Severity::Critical),
        ];
        let summary = generate_summary(&site(Vec::new(), false), &gaps);

        assert_eq!(summary.total_gaps, 4);
        assert_eq!(summary.critical_gaps, 2);
        assert_eq!(summary.significant_gaps, 1);
        assert_eq!(summary.moderate_gaps, 1);
        assert_eq!(summary.target_weaknesses, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_weaknesses_capped_in_emission_order() {
        let gaps: Vec<_> = (0..8)
            .map(|i| gap(&format!("gap {}", i), Severity::Significant))
            .collect();
        let summary = generate_summary(&site(Vec::new(), false), &gaps);

        assert_eq!(
            summary.target_weaknesses,
            vec!["gap 0", "gap 1", "gap 2", "gap 3", "gap 4"]
        );
    }

    #[test]
    fn test_strengths_from_target_only() {
        let mut pages = vec![
            Page::new("https://target.test/faq", "FAQ").unwrap(),
            Page::new("https://target.test/x", "X").unwrap().with_process(true),
            Page::new("https://target.test/reviews", "Reviews").unwrap().with_reviews(true),
        ];
        for i in 0..8 {
            pages.push(Page::new(format!("https://target.test/p{}", i), "").unwrap());
        }

        let summary = generate_summary(&site(pages, true), &[]);
        assert_eq!(summary.target_strengths.len(), 5);
        // /faq carries no flag; the URL alone counts
        assert!(summary.target_strengths[0].contains("FAQ"));
        assert!(summary.target_strengths[4].contains("11 pages"));
        assert!(summary.target_weaknesses.is_empty());
    }

    #[test]
    fn test_no_strengths_for_bare_site() {
        let summary = generate_summary(&site(Vec::new(), false), &[]);
        assert!(summary.target_strengths.is_empty());
        assert_eq!(summary.total_gaps, 0);
    }
}
