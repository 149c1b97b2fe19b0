use serde::{Deserialize, Serialize};

use crate::{NocCode, Season};

/// Per-country medal counts for one retained Games edition.
///
/// Invariant: `total == gold + silver + bronze`. The medal normalizer
/// recomputes the total whenever the source value is missing or disagrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub games_id: i64,
    pub noc: NocCode,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalTally {
    pub fn computed_total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Raw medal-tally row before edition filtering. The source total may be
/// absent or inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMedalRow {
    pub games_id: i64,
    pub noc: NocCode,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: Option<u32>,
}

/// Medal won in a single athlete event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    /// Lenient parse of a medal-outcome cell.
    ///
    /// Source values vary ("Gold", "gold", "Gold medal"); matching is by
    /// case-insensitive substring. Empty or unrecognized values mean no
    /// medal.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return None;
        }
        if lower.contains("gold") {
            Some(MedalKind::Gold)
        } else if lower.contains("silver") {
            Some(MedalKind::Silver)
        } else if lower.contains("bronze") {
            Some(MedalKind::Bronze)
        } else {
            None
        }
    }
}

/// One per-athlete event record, consumed read-only by the per-sport
/// queries and the co-occurrence matrix builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteEvent {
    pub edition: String,
    pub year: i32,
    pub noc: NocCode,
    pub sport: String,
    pub medal: Option<MedalKind>,
}

impl AthleteEvent {
    pub fn season(&self) -> Season {
        Season::from_edition_label(&self.edition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_kind_parses_leniently() {
        assert_eq!(MedalKind::parse("Gold"), Some(MedalKind::Gold));
        assert_eq!(MedalKind::parse("silver medal"), Some(MedalKind::Silver));
        assert_eq!(MedalKind::parse(" BRONZE "), Some(MedalKind::Bronze));
        assert_eq!(MedalKind::parse(""), None);
        assert_eq!(MedalKind::parse("DNF"), None);
    }

    #[test]
    fn computed_total_sums_components() {
        let tally = MedalTally {
            games_id: 1,
            noc: NocCode::new("USA").unwrap(),
            gold: 11,
            silver: 7,
            bronze: 2,
            total: 20,
        };
        assert_eq!(tally.computed_total(), 20);
    }
}
