use crate::config::ReportConfig;
use crate::gaps::{ContentGap, Level, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Gaps grouped into three implementation phases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationTimeline {
    pub immediate: Vec<ContentGap>,
    pub short_term: Vec<ContentGap>,
    pub long_term: Vec<ContentGap>,
}

impl ImplementationTimeline {
    pub fn len(&self) -> usize {
        self.immediate.len() + self.short_term.len() + self.long_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Place gaps into phases.
///
/// Immediate: critical gaps that aren't high effort. Short term: significant
/// gaps and high-effort critical ones. Long term: moderate gaps. Placement is
/// tracked by position in `gaps`, so no gap lands in two phases.
pub fn build_timeline(gaps: &[ContentGap], config: &ReportConfig) -> ImplementationTimeline {
    let mut placed: HashSet<usize> = HashSet::new();

    let immediate = take_phase(gaps, &mut placed, config.immediate_limit, |g| {
        g.severity == Severity::Critical && g.estimated_effort != Level::High
    });
    let short_term = take_phase(gaps, &mut placed, config.short_term_limit, |g| {
        match g.severity {
            Severity::Significant => true,
            Severity::Critical => g.estimated_effort == Level::High,
            Severity::Moderate => false,
        }
    });
    let long_term = take_phase(gaps, &mut placed, config.long_term_limit, |g| {
        g.severity == Severity::Moderate
    });

    ImplementationTimeline {
        immediate,
        short_term,
        long_term,
    }
}

/// Up to `limit` unplaced gaps accepted by `accept`, marking them placed
fn take_phase<F>(
    gaps: &[ContentGap],
    placed: &mut HashSet<usize>,
    limit: usize,
    accept: F,
) -> Vec<ContentGap>
where
    F: Fn(&ContentGap) -> bool,
{
    let chosen: Vec<usize> = (0..gaps.len())
        .filter(|i| !placed.contains(i) && accept(&gaps[*i]))
        .take(limit)
        .collect();
    placed.extend(&chosen);

    chosen.into_iter().map(|i| gaps[i].clone()).collect()
}

/// Timeline with the default phase caps
pub fn generate_implementation_timeline(gaps: &[ContentGap]) -> ImplementationTimeline {
    build_timeline(gaps, &ReportConfig::default())
}
