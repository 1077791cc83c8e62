use crate::error::{GapError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use url::Url;

/// One parsed page of a site, as produced by the upstream extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// URL of the page
    pub url: String,

    /// Title of the page
    pub title: String,

    /// Lower-cased keyword tags (order irrelevant, duplicates possible)
    #[serde(default)]
    pub main_topics: Vec<String>,

    /// Number of words in the main content
    pub word_count: u64,

    /// Whether the page carries an FAQ section
    #[serde(default)]
    pub has_faq: bool,

    /// Whether the page explains the service process
    #[serde(default)]
    pub has_process: bool,

    /// Whether the page shows reviews or testimonials
    #[serde(default)]
    pub has_reviews: bool,
}

impl Page {
    /// Create a new page; the URL is required
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(GapError::MissingField("page.url"));
        }

        Ok(Self {
            url,
            title: title.into(),
            main_topics: Vec::new(),
            word_count: 0,
            has_faq: false,
            has_process: false,
            has_reviews: false,
        })
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.main_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_word_count(mut self, word_count: u64) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_faq(mut self, has_faq: bool) -> Self {
        self.has_faq = has_faq;
        self
    }

    pub fn with_process(mut self, has_process: bool) -> Self {
        self.has_process = has_process;
        self
    }

    pub fn with_reviews(mut self, has_reviews: bool) -> Self {
        self.has_reviews = has_reviews;
        self
    }

    /// Topics of this page, lower-cased, each listed once
    pub fn normalized_topics(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.main_topics
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect()
    }
}

/// Site-wide signals that don't belong to a single page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Whether structured data (schema.org markup) was found
    #[serde(default)]
    pub has_schema: bool,
}

/// Snapshot of one website, read-only for the whole comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteContent {
    /// Site root
    pub url: String,

    #[serde(default)]
    pub pages: Vec<Page>,

    #[serde(default)]
    pub metadata: SiteMetadata,
}

impl WebsiteContent {
    /// Create a snapshot, validating the site root and page URLs
    pub fn new(url: impl Into<String>, pages: Vec<Page>, metadata: SiteMetadata) -> Result<Self> {
        let content = Self {
            url: url.into(),
            pages,
            metadata,
        };
        content.validate()?;
        Ok(content)
    }

    /// Parse a snapshot from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load a snapshot from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check the fields the detectors rely on.
    ///
    /// Duplicate page URLs are the producer's problem; they are reported but
    /// not rejected.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(GapError::MissingField("url"));
        }
        // Upstream may hand over a bare host; it is passed through as-is
        if let Err(e) = Url::parse(&self.url) {
            ::log::warn!("Site root {} is not an absolute URL: {}", self.url, e);
        }

        let mut seen = HashSet::new();
        for (index, page) in self.pages.iter().enumerate() {
            if page.url.trim().is_empty() {
                return Err(GapError::EmptyPageUrl { index });
            }
            if !seen.insert(page.url.as_str()) {
                ::log::warn!("Duplicate page URL in {}: {}", self.url, page.url);
            }
        }

        Ok(())
    }

    /// Mean word count, using `max(page_count, 1)` as the denominator
    pub fn average_word_count(&self) -> f64 {
        let total: u64 = self.pages.iter().map(|p| p.word_count).sum();
        total as f64 / self.pages.len().max(1) as f64
    }

    /// First page with the highest word count
    pub fn longest_page(&self) -> Option<&Page> {
        self.pages
            .iter()
            .min_by_key(|p| std::cmp::Reverse(p.word_count))
    }

    pub fn has_review_page(&self) -> bool {
        self.pages.iter().any(|p| p.has_reviews)
    }
}
