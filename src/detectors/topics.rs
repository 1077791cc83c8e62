use crate::config::GapThresholds;
use crate::content::{Page, WebsiteContent};
use crate::detectors::GapDetector;
use crate::gaps::{ContentGap, ContentType, GapTemplate, GapType, Level, Severity};
use crate::utils::{pluralize, title_case};
use std::collections::{HashMap, HashSet};

/// A competitor topic the target never mentions
#[derive(Debug, Clone)]
pub struct TopicCandidate<'a> {
    pub topic: String,
    pub pages: Vec<&'a Page>,
}

/// Finds topics a competitor covers repeatedly that the target lacks.
///
/// Page frequency stands in for topic importance: a topic mentioned on more
/// competitor pages ranks higher. Short tags and one-off mentions are dropped
/// as noise.
#[derive(Debug, Clone, Default)]
pub struct TopicGapDetector {
    thresholds: GapThresholds,
}

impl TopicGapDetector {
    pub fn new(thresholds: GapThresholds) -> Self {
        Self { thresholds }
    }

    /// Qualifying candidates, most frequent first, uncapped
    pub fn candidates<'a>(
        &self,
        target: &WebsiteContent,
        competitor: &'a WebsiteContent,
    ) -> Vec<TopicCandidate<'a>> {
        let target_topics = collect_topics(target);

        let mut candidates: Vec<TopicCandidate<'a>> = group_pages_by_topic(competitor)
            .into_iter()
            .filter(|c| !target_topics.contains(&c.topic))
            .filter(|c| c.topic.chars().count() > self.thresholds.min_topic_length)
            .filter(|c| c.pages.len() >= self.thresholds.min_topic_pages)
            .collect();

        // Stable, so equal counts keep first-appearance order
        candidates.sort_by(|a, b| b.pages.len().cmp(&a.pages.len()));
        candidates
    }

    fn severity_for(&self, page_count: usize) -> (Severity, GapType, Level) {
        if page_count >= self.thresholds.critical_topic_pages {
            (Severity::Critical, GapType::CriticalTopic, Level::High)
        } else if page_count >= self.thresholds.significant_topic_pages {
            (Severity::Significant, GapType::SignificantTopic, Level::Medium)
        } else {
            (Severity::Moderate, GapType::ModerateTopic, Level::Low)
        }
    }

    fn to_gap(&self, candidate: &TopicCandidate<'_>, competitor_name: &str) -> ContentGap {
        let (severity, gap_type, impact) = self.severity_for(candidate.pages.len());
        let topic = title_case(&candidate.topic);

        ContentGap::new(
            GapTemplate::TopicCoverage,
            gap_type,
            severity,
            ContentType::WebsiteContent,
            impact,
            Level::Medium,
        )
        .with_text(
            format!("Missing Topic: {}", topic),
            format!(
                "{} covers \"{}\" across {} while your site never mentions it.",
                competitor_name,
                topic,
                pluralize(candidate.pages.len(), "page")
            ),
            format!(
                "Create content about {} to compete for searches on this topic.",
                topic
            ),
        )
        .with_competitor(competitor_name)
        .with_example_url(candidate.pages.first().map(|p| p.url.as_str()))
    }
}

impl GapDetector for TopicGapDetector {
    fn name(&self) -> &'static str {
        "topics"
    }

    fn detect(
        &self,
        target: &WebsiteContent,
        competitor: &WebsiteContent,
        competitor_name: &str,
    ) -> Vec<ContentGap> {
        let candidates = self.candidates(target, competitor);
        ::log::debug!(
            "{} has {} topics missing from the target, keeping at most {}",
            competitor_name,
            candidates.len(),
            self.thresholds.max_topic_gaps
        );

        candidates
            .iter()
            .take(self.thresholds.max_topic_gaps)
            .map(|c| self.to_gap(c, competitor_name))
            .collect()
    }
}

/// Every lower-cased topic across the site's pages
fn collect_topics(site: &WebsiteContent) -> HashSet<String> {
    site.pages
        .iter()
        .flat_map(|p| p.normalized_topics())
        .collect()
}

/// Topic to pages mentioning it, topics in order of first appearance
fn group_pages_by_topic(site: &WebsiteContent) -> Vec<TopicCandidate<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<TopicCandidate<'_>> = Vec::new();

    for page in &site.pages {
        for topic in page.normalized_topics() {
            match index.get(&topic).copied() {
                Some(i) => groups[i].pages.push(page),
                None => {
                    index.insert(topic.clone(), groups.len());
                    groups.push(TopicCandidate {
                        topic,
                        pages: vec![page],
                    });
                }
            }
        }
    }

    groups
}

/// Topic gaps using the default thresholds
pub fn find_topic_gaps(
    target: &WebsiteContent,
    competitor: &WebsiteContent,
    competitor_name: &str,
) -> Vec<ContentGap> {
    TopicGapDetector::default().detect(target, competitor, competitor_name)
}
