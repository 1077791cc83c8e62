use crate::gaps::{ContentGap, ContentType, GapTemplate, Level, Severity};
use serde::{Deserialize, Serialize};

/// An actionable plan for closing one gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub gap_title: String,
    pub template_id: GapTemplate,
    pub priority: Level,
    pub estimated_impact: Level,
    pub estimated_effort: Level,
    pub content_type: ContentType,
    pub action: String,
    pub steps: Vec<String>,
    pub competitors_have_this: Vec<String>,
}

impl From<&ContentGap> for Recommendation {
    fn from(gap: &ContentGap) -> Self {
        Self {
            gap_title: gap.gap_title.clone(),
            template_id: gap.template_id,
            priority: priority_for(gap.severity),
            estimated_impact: gap.estimated_impact,
            estimated_effort: gap.estimated_effort,
            content_type: gap.content_type,
            action: gap.recommended_action.clone(),
            steps: action_steps(gap.template_id)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            competitors_have_this: gap.competitors_have_this.clone(),
        }
    }
}

pub fn priority_for(severity: Severity) -> Level {
    match severity {
        Severity::Critical => Level::High,
        Severity::Significant => Level::Medium,
        Severity::Moderate => Level::Low,
    }
}

const FAQ_STEPS: [&str; 5] = [
    "Collect the questions customers ask most often from calls, emails and reviews",
    "Group the questions by topic: pricing, process, timing and service area",
    "Write short, direct answers and link each to the relevant service page",
    "Mark the page up with FAQPage schema",
    "Publish the page and link it from the main navigation",
];

const PROCESS_STEPS: [&str; 5] = [
    "Map every step a customer goes through from first contact to completion",
    "Write a short explanation of what happens and how long each step takes",
    "Add photos, diagrams or a short video illustrating the steps",
    "Address common concerns and what the customer needs to prepare",
    "Publish as a \"How It Works\" page and link it from service pages",
];

const SCHEMA_STEPS: [&str; 5] = [
    "Identify the schema types that apply: LocalBusiness, Service, FAQPage, Review",
    "Generate JSON-LD markup with the business name, address, phone and hours",
    "Add the markup to the site template or individual pages",
    "Validate the markup with a structured data testing tool",
    "Monitor search console for structured data errors",
];

const GENERIC_STEPS: [&str; 5] = [
    "Research what the competitor covers and what customers search for",
    "Outline the content and the questions it should answer",
    "Create the content with clear headings and a call to action",
    "Review for accuracy, tone and internal links",
    "Publish and track its performance",
];

/// Fixed checklist for a gap, chosen by the rule that produced it
pub fn action_steps(template: GapTemplate) -> &'static [&'static str; 5] {
    match template {
        GapTemplate::FaqPage => &FAQ_STEPS,
        GapTemplate::ProcessPage => &PROCESS_STEPS,
        GapTemplate::SchemaMarkup => &SCHEMA_STEPS,
        GapTemplate::Reviews
        | GapTemplate::ServicePages
        | GapTemplate::TopicCoverage
        | GapTemplate::BookingSystem
        | GapTemplate::ContentDepth => &GENERIC_STEPS,
    }
}

/// One recommendation per gap, in the same order
pub fn generate_recommendations(gaps: &[ContentGap]) -> Vec<Recommendation> {
    gaps.iter().map(Recommendation::from).collect()
}
