use serde::{Deserialize, Serialize};

/// Category of a detected gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    Structural,
    Thematic,
    CriticalTopic,
    SignificantTopic,
    ModerateTopic,
}

/// Coarse priority tier, `Critical` being the most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Significant,
    Moderate,
}

/// Area of the site a gap belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    WebsiteContent,
    ServicePages,
    TrustBuilding,
    TechnicalSeo,
    UserExperience,
}

/// Three-step scale used for impact, effort and recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Identifies the rule that produced a gap.
///
/// Downstream consumers switch on this rather than on the gap title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapTemplate {
    FaqPage,
    ProcessPage,
    SchemaMarkup,
    Reviews,
    ServicePages,
    TopicCoverage,
    BookingSystem,
    ContentDepth,
}

/// One detected difference between the target and a competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGap {
    pub gap_type: GapType,
    pub gap_title: String,
    pub gap_description: String,
    pub recommended_action: String,
    pub severity: Severity,
    pub competitors_have_this: Vec<String>,
    pub content_type: ContentType,
    pub competitor_example_url: Option<String>,
    pub estimated_impact: Level,
    pub estimated_effort: Level,
    pub template_id: GapTemplate,
}

impl ContentGap {
    /// Start a gap with its fixed classification; text and competitor follow
    pub fn new(
        template_id: GapTemplate,
        gap_type: GapType,
        severity: Severity,
        content_type: ContentType,
        estimated_impact: Level,
        estimated_effort: Level,
    ) -> Self {
        Self {
            gap_type,
            gap_title: String::new(),
            gap_description: String::new(),
            recommended_action: String::new(),
            severity,
            competitors_have_this: Vec::new(),
            content_type,
            competitor_example_url: None,
            estimated_impact,
            estimated_effort,
            template_id,
        }
    }

    pub fn with_text(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.gap_title = title.into();
        self.gap_description = description.into();
        self.recommended_action = action.into();
        self
    }

    pub fn with_competitor(mut self, name: &str) -> Self {
        self.add_competitor(name);
        self
    }

    pub fn with_example_url(mut self, url: Option<&str>) -> Self {
        self.competitor_example_url = url.map(str::to_string);
        self
    }

    /// Whether the gap lands in the weakness list and the short-term plan
    pub fn is_pressing(&self) -> bool {
        matches!(self.severity, Severity::Critical | Severity::Significant)
    }

    /// Record another competitor that exhibits the same gap
    pub fn add_competitor(&mut self, name: &str) {
        if !self.competitors_have_this.iter().any(|c| c == name) {
            self.competitors_have_this.push(name.to_string());
        }
    }

    /// Whether two gaps describe the same difference, regardless of competitor
    pub fn same_gap(&self, other: &ContentGap) -> bool {
        self.template_id == other.template_id && self.gap_title == other.gap_title
    }
}
