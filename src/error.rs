use thiserror::Error;

/// Errors raised at the boundaries of the analysis engine.
///
/// The detectors themselves never fail; these cover loading configuration and
/// site snapshots, and rejecting malformed input before it reaches them.
#[derive(Debug, Error)]
pub enum GapError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid regex pattern '{name}': {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Page at index {index} has an empty URL")]
    EmptyPageUrl { index: usize },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Got {names} competitor names for {competitors} competitors")]
    NameCountMismatch { names: usize, competitors: usize },
}

pub type Result<T> = std::result::Result<T, GapError>;
