use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PodiumError;

/// Olympic season.
///
/// Raw data has no dedicated season field; the season is inferred from the
/// free-text edition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Infer the season from an edition label such as "1896 Summer Olympics".
    ///
    /// Containment is case-sensitive; any label without "Summer" counts as
    /// Winter.
    pub fn from_edition_label(label: &str) -> Self {
        if label.contains("Summer") {
            Season::Summer
        } else {
            Season::Winter
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => f.write_str("Summer"),
            Season::Winter => f.write_str("Winter"),
        }
    }
}

impl FromStr for Season {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            other => Err(PodiumError::NotFound {
                kind: "season",
                name: other.to_string(),
            }),
        }
    }
}

/// Host country of an edition after reconciliation.
///
/// An unresolved host keeps its original label verbatim; it is marked, never
/// dropped and never replaced with a guessed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum HostCountry {
    /// Canonical registry display name.
    Resolved(String),
    /// Original label that matched no registry entry.
    Unresolved(String),
}

impl HostCountry {
    /// The label to show, resolved or not.
    pub fn label(&self) -> &str {
        match self {
            HostCountry::Resolved(name) | HostCountry::Unresolved(name) => name,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, HostCountry::Resolved(_))
    }
}

/// One Olympic Games edition, as retained by the season normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesEdition {
    pub id: i64,
    pub year: i32,
    pub host_city: String,
    pub host_country: HostCountry,
    pub season: Season,
}

/// Raw Games row as read from the source table, before season filtering and
/// host-country reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGamesRow {
    pub id: i64,
    pub edition: String,
    pub year: i32,
    pub host_city: String,
    pub host_country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_from_edition_label() {
        assert_eq!(
            Season::from_edition_label("1896 Summer Olympics"),
            Season::Summer
        );
        assert_eq!(
            Season::from_edition_label("1924 Winter Olympics"),
            Season::Winter
        );
        // Case-sensitive containment: lowercase "summer" does not match.
        assert_eq!(
            Season::from_edition_label("1948 summer olympics"),
            Season::Winter
        );
    }

    #[test]
    fn host_country_label_is_preserved() {
        let unresolved = HostCountry::Unresolved("Untied States".to_string());
        assert_eq!(unresolved.label(), "Untied States");
        assert!(!unresolved.is_resolved());
    }
}
