use crate::config::PatternConfig;
use crate::content::{Page, WebsiteContent};
use crate::error::{GapError, Result};
use regex::{Regex, RegexBuilder};

/// Compiled URL and title patterns that classify pages by purpose
#[derive(Debug, Clone)]
pub struct PagePatterns {
    faq: Regex,
    process: Regex,
    service: Regex,
    booking_url: Regex,
    booking_title_keywords: Vec<String>,
}

impl Default for PagePatterns {
    fn default() -> Self {
        Self::new(&PatternConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl PagePatterns {
    /// Compile patterns from configuration
    pub fn new(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            faq: compile("faq", &config.faq)?,
            process: compile("process", &config.process)?,
            service: compile("service", &config.service)?,
            booking_url: compile("booking_url", &config.booking_url)?,
            booking_title_keywords: config
                .booking_title_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        })
    }

    /// FAQ flag set, or an FAQ-like URL
    pub fn is_faq_page(&self, page: &Page) -> bool {
        page.has_faq || self.faq.is_match(&page.url)
    }

    /// Process flag set, or a how-it-works style URL
    pub fn is_process_page(&self, page: &Page) -> bool {
        page.has_process || self.process.is_match(&page.url)
    }

    pub fn is_service_page(&self, page: &Page) -> bool {
        self.service.is_match(&page.url)
    }

    /// Booking/quote URL, or a title naming a booking keyword
    pub fn is_booking_page(&self, page: &Page) -> bool {
        if self.booking_url.is_match(&page.url) {
            return true;
        }

        let title = page.title.to_lowercase();
        self.booking_title_keywords
            .iter()
            .any(|keyword| title.contains(keyword.as_str()))
    }

    pub fn find_faq_page<'a>(&self, site: &'a WebsiteContent) -> Option<&'a Page> {
        site.pages.iter().find(|p| self.is_faq_page(p))
    }

    pub fn find_process_page<'a>(&self, site: &'a WebsiteContent) -> Option<&'a Page> {
        site.pages.iter().find(|p| self.is_process_page(p))
    }

    pub fn find_booking_page<'a>(&self, site: &'a WebsiteContent) -> Option<&'a Page> {
        site.pages.iter().find(|p| self.is_booking_page(p))
    }

    pub fn service_pages<'a>(&self, site: &'a WebsiteContent) -> Vec<&'a Page> {
        site.pages
            .iter()
            .filter(|p| self.is_service_page(p))
            .collect()
    }
}

/// Patterns match case-insensitively, URLs are rarely consistent about case
fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| GapError::InvalidPattern { name, source })
}
