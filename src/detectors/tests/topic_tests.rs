use super::fixtures::{page, site, topic_pages};
use crate::config::GapThresholds;
use crate::detectors::GapDetector;
use crate::detectors::topics::{TopicGapDetector, find_topic_gaps};
use crate::gaps::{GapTemplate, GapType, Level, Severity};

#[cfg(test)]
mod threshold_tests {
    use super::*;

    #[test]
    fn test_two_pages_qualify_one_does_not() {
        let target = site("https://target.test", topic_pages("https://target.test", &[&["roofing"]]));
        let competitor = site(
            "https://rival.test",
            topic_pages(
                "https://rival.test",
                &[&["gutters", "siding"], &["gutters"], &["roofing"]],
            ),
        );

        let gaps = find_topic_gaps(&target, &competitor, "Rival");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_title, "Missing Topic: Gutters");
        assert_eq!(gaps[0].template_id, GapTemplate::TopicCoverage);
        assert_eq!(gaps[0].severity, Severity::Moderate);
        assert_eq!(gaps[0].gap_type, GapType::ModerateTopic);
        assert_eq!(gaps[0].estimated_impact, Level::Low);
        assert_eq!(gaps[0].estimated_effort, Level::Medium);
        assert_eq!(
            gaps[0].competitor_example_url.as_deref(),
            Some("https://rival.test/page-0")
        );
    }

    #[test]
    fn test_short_topics_are_ignored() {
        // "hvac" has four characters and counts, "diy" does not
        let target = site("https://target.test", Vec::new());
        let competitor = site(
            "https://rival.test",
            topic_pages("https://rival.test", &[&["diy", "hvac"], &["diy", "hvac"]]),
        );

        let gaps = find_topic_gaps(&target, &competitor, "Rival");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_title, "Missing Topic: Hvac");
    }

    #[test]
    fn test_topics_compare_case_insensitively() {
        let target = site("https://target.test", topic_pages("https://target.test", &[&["Gutters"]]));
        let competitor = site(
            "https://rival.test",
            topic_pages("https://rival.test", &[&["gutters"], &["GUTTERS"]]),
        );

        assert!(find_topic_gaps(&target, &competitor, "Rival").is_empty());
    }

    #[test]
    fn test_repeated_tag_on_one_page_counts_once() {
        let target = site("https://target.test", Vec::new());
        let competitor = site(
            "https://rival.test",
            topic_pages("https://rival.test", &[&["gutters", "gutters", "gutters"]]),
        );

        assert!(find_topic_gaps(&target, &competitor, "Rival").is_empty());
    }

    #[test]
    fn test_severity_tiers() {
        let target = site("https://target.test", Vec::new());
        let competitor = site(
            "https://rival.test",
            topic_pages(
                "https://rival.test",
                &[
                    &["roofing", "siding", "gutters"],
                    &["roofing", "siding", "gutters"],
                    &["roofing", "siding"],
                    &["roofing"],
                ],
            ),
        );

        let gaps = find_topic_gaps(&target, &competitor, "Rival");
        let tiers: Vec<_> = gaps
            .iter()
            .map(|g| (g.gap_title.as_str(), g.severity, g.gap_type, g.estimated_impact))
            .collect();
        assert_eq!(
            tiers,
            vec![
                ("Missing Topic: Roofing", Severity::Critical, GapType::CriticalTopic, Level::High),
                ("Missing Topic: Siding", Severity::Significant, GapType::SignificantTopic, Level::Medium),
                ("Missing Topic: Gutters", Severity::Moderate, GapType::ModerateTopic, Level::Low),
            ]
        );
        assert!(gaps[0].gap_description.contains("4 pages"));
        assert!(gaps.iter().all(|g| g.estimated_effort == Level::Medium));
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_capped_at_five_highest_frequency() {
        // 20 qualifying topics; topic-i appears on (i % 4) + 2 pages
        let mut pages = Vec::new();
        for i in 0..20 {
            for j in 0..((i % 4) + 2) {
                pages.push(
                    page(&format!("https://rival.test/t{}-p{}", i, j))
                        .with_topics([format!("topic-{:02}", i)]),
                );
            }
        }
        let target = site("https://target.test", Vec::new());
        let competitor = site("https://rival.test", pages);

        let gaps = find_topic_gaps(&target, &competitor, "Rival");
        assert_eq!(gaps.len(), 5);

        // Topics with 5 pages are 3, 7, 11, 15, 19, in first-appearance order
        let titles: Vec<_> = gaps.iter().map(|g| g.gap_title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Missing Topic: Topic-03",
                "Missing Topic: Topic-07",
                "Missing Topic: Topic-11",
                "Missing Topic: Topic-15",
                "Missing Topic: Topic-19",
            ]
        );
        assert!(gaps.iter().all(|g| g.severity == Severity::Critical));
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let target = site("https://target.test", Vec::new());
        let competitor = site(
            "https://rival.test",
            topic_pages(
                "https://rival.test",
                &[&["zoning", "awnings"], &["awnings", "zoning", "decking"], &["decking"]],
            ),
        );

        let titles: Vec<_> = find_topic_gaps(&target, &competitor, "Rival")
            .into_iter()
            .map(|g| g.gap_title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Missing Topic: Zoning",
                "Missing Topic: Awnings",
                "Missing Topic: Decking",
            ]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = GapThresholds {
            min_topic_pages: 1,
            max_topic_gaps: 2,
            ..GapThresholds::default()
        };
        let detector = TopicGapDetector::new(thresholds);

        let target = site("https://target.test", Vec::new());
        let competitor = site(
            "https://rival.test",
            topic_pages("https://rival.test", &[&["roofing", "siding", "gutters"]]),
        );

        assert_eq!(detector.candidates(&target, &competitor).len(), 3);
        assert_eq!(detector.detect(&target, &competitor, "Rival").len(), 2);
    }

    #[test]
    fn test_empty_sites() {
        let target = site("https://target.test", Vec::new());
        let competitor = site("https://rival.test", Vec::new());

        assert!(find_topic_gaps(&target, &competitor, "Rival").is_empty());
    }
}
