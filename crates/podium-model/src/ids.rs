use std::fmt;

use crate::PodiumError;

/// National Olympic Committee code, the short country identifier used
/// across all datasets (e.g. "USA", "GRE").
///
/// Stored uppercase so that code joins are insensitive to source casing.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NocCode(String);

impl NocCode {
    pub fn new(value: impl Into<String>) -> Result<Self, PodiumError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PodiumError::InvalidNocCode(value));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
