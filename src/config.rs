use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Thresholds the detectors compare against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapThresholds {
    /// Topics must be longer than this many characters to count
    #[serde(default = "default_min_topic_length")]
    pub min_topic_length: usize,

    /// Minimum number of competitor pages mentioning a topic
    #[serde(default = "default_min_topic_pages")]
    pub min_topic_pages: usize,

    /// Maximum number of topic gaps reported per competitor
    #[serde(default = "default_max_topic_gaps")]
    pub max_topic_gaps: usize,

    /// Page count at which a topic gap becomes critical
    #[serde(default = "default_critical_topic_pages")]
    pub critical_topic_pages: usize,

    /// Page count at which a topic gap becomes significant
    #[serde(default = "default_significant_topic_pages")]
    pub significant_topic_pages: usize,

    /// Competitor mean word count must exceed the target's times this ratio
    #[serde(default = "default_content_depth_ratio")]
    pub content_depth_ratio: f64,

    /// Competitor must have more than this many extra service pages
    #[serde(default = "default_service_page_margin")]
    pub service_page_margin: usize,
}

/// Regex patterns used to classify pages by URL and title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    #[serde(default = "default_faq_pattern")]
    pub faq: String,

    #[serde(default = "default_process_pattern")]
    pub process: String,

    #[serde(default = "default_service_pattern")]
    pub service: String,

    #[serde(default = "default_booking_pattern")]
    pub booking_url: String,

    /// Title keywords that mark a booking or quote page
    #[serde(default = "default_booking_title_keywords")]
    pub booking_title_keywords: Vec<String>,
}

/// Caps and thresholds for the summary and timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_max_weaknesses")]
    pub max_weaknesses: usize,

    /// Sites with more pages than this get a content-library strength
    #[serde(default = "default_strength_page_count")]
    pub strength_page_count: usize,

    #[serde(default = "default_immediate_limit")]
    pub immediate_limit: usize,

    #[serde(default = "default_short_term_limit")]
    pub short_term_limit: usize,

    #[serde(default = "default_long_term_limit")]
    pub long_term_limit: usize,
}

/// Complete configuration for a gap analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub thresholds: GapThresholds,

    #[serde(default)]
    pub patterns: PatternConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            min_topic_length: default_min_topic_length(),
            min_topic_pages: default_min_topic_pages(),
            max_topic_gaps: default_max_topic_gaps(),
            critical_topic_pages: default_critical_topic_pages(),
            significant_topic_pages: default_significant_topic_pages(),
            content_depth_ratio: default_content_depth_ratio(),
            service_page_margin: default_service_page_margin(),
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            faq: default_faq_pattern(),
            process: default_process_pattern(),
            service: default_service_pattern(),
            booking_url: default_booking_pattern(),
            booking_title_keywords: default_booking_title_keywords(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_weaknesses: default_max_weaknesses(),
            strength_page_count: default_strength_page_count(),
            immediate_limit: default_immediate_limit(),
            short_term_limit: default_short_term_limit(),
            long_term_limit: default_long_term_limit(),
        }
    }
}

fn default_min_topic_length() -> usize {
    3
}

fn default_min_topic_pages() -> usize {
    2
}

fn default_max_topic_gaps() -> usize {
    5
}

fn default_critical_topic_pages() -> usize {
    4
}

fn default_significant_topic_pages() -> usize {
    3
}

fn default_content_depth_ratio() -> f64 {
    1.5
}

fn default_service_page_margin() -> usize {
    2
}

fn default_faq_pattern() -> String {
    r"/faq|/frequently-asked|/questions".to_string()
}

fn default_process_pattern() -> String {
    r"/how-it-works|/process|/our-process|/procedure".to_string()
}

fn default_service_pattern() -> String {
    r"/services?/|-service".to_string()
}

fn default_booking_pattern() -> String {
    r"book|schedule|appointment|quote|estimate".to_string()
}

fn default_booking_title_keywords() -> Vec<String> {
    vec!["book".to_string(), "quote".to_string()]
}

fn default_max_weaknesses() -> usize {
    5
}

fn default_strength_page_count() -> usize {
    10
}

fn default_immediate_limit() -> usize {
    5
}

fn default_short_term_limit() -> usize {
    8
}

fn default_long_term_limit() -> usize {
    10
}
