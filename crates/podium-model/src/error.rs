use thiserror::Error;

/// Engine-level error taxonomy.
///
/// Deliberately small: unresolved country labels and dangling medal
/// references degrade to safe fallbacks during normalization instead of
/// erroring, and degenerate clustering input yields an empty result with
/// a diagnostic. What remains is what callers must actually handle.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// A query parameter does not exist in the normalized tables.
    #[error("{kind} not found: {name:?}")]
    NotFound { kind: &'static str, name: String },

    /// Startup normalization failed; the engine is serving in degraded
    /// mode and this query depends on the missing tables.
    #[error("engine not initialized: {0}")]
    NotInitialized(String),

    #[error("invalid NOC code: {0:?}")]
    InvalidNocCode(String),
}

pub type Result<T> = std::result::Result<T, PodiumError>;
