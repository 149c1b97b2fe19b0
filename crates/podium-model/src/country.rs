use serde::{Deserialize, Serialize};

use crate::NocCode;

/// Canonical (code, display name) pair from the country-profile dataset.
///
/// Immutable after load; the source of truth for country identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub noc: NocCode,
    pub name: String,
}

impl CountryProfile {
    pub fn new(noc: NocCode, name: impl Into<String>) -> Self {
        Self {
            noc,
            name: name.into(),
        }
    }
}
