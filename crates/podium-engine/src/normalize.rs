//! Season and medal normalization.
//!
//! Runs once at startup: the season normalizer restricts the raw Games
//! table to Summer editions and reconciles host-country labels; the medal
//! normalizer restricts the raw tally table to the retained editions and
//! enforces the total invariant.

use std::collections::HashSet;

use tracing::{debug, warn};

use podium_model::{GamesEdition, MedalTally, RawGamesRow, RawMedalRow, Season};

use crate::reconcile::{ReconcileStats, Reconciler};
use crate::registry::CountryRegistry;

#[derive(Debug, Clone)]
pub struct NormalizedGames {
    pub editions: Vec<GamesEdition>,
    pub reconcile_stats: ReconcileStats,
}

/// Retains Summer editions only, with host countries reconciled.
///
/// An unresolved host never drops the row: the edition is kept with the
/// original label marked unresolved, and the event is logged for operator
/// visibility. Output is sorted by year.
pub fn normalize_games(rows: &[RawGamesRow], registry: &CountryRegistry) -> NormalizedGames {
    let mut reconciler = Reconciler::new(registry);
    let mut editions = Vec::new();

    for row in rows {
        let season = Season::from_edition_label(&row.edition);
        if season != Season::Summer {
            continue;
        }
        let outcome = reconciler.reconcile(&row.host_country);
        if outcome.is_unresolved() {
            warn!(
                edition = %row.edition,
                host_country = %row.host_country,
                "host country matches no registry entry; keeping original label"
            );
        }
        editions.push(GamesEdition {
            id: row.id,
            year: row.year,
            host_city: row.host_city.clone(),
            host_country: outcome.into_host_country(),
            season,
        });
    }

    editions.sort_by_key(|e| (e.year, e.id));
    let reconcile_stats = reconciler.stats();
    debug!(
        retained = editions.len(),
        corrected = reconcile_stats.corrected,
        unresolved = reconcile_stats.unresolved,
        "season normalization complete"
    );
    NormalizedGames {
        editions,
        reconcile_stats,
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedMedals {
    pub tallies: Vec<MedalTally>,
    /// Rows referencing editions outside the retained Summer set. Expected
    /// Winter pruning, not an error.
    pub rows_dropped: usize,
    /// Rows whose source total was absent or disagreed with the sum.
    pub totals_recomputed: usize,
}

/// Restricts the raw tally table to retained editions and enforces
/// `total == gold + silver + bronze`.
pub fn normalize_medals(rows: &[RawMedalRow], editions: &[GamesEdition]) -> NormalizedMedals {
    let retained: HashSet<i64> = editions.iter().map(|e| e.id).collect();
    let mut tallies = Vec::with_capacity(rows.len());
    let mut rows_dropped = 0usize;
    let mut totals_recomputed = 0usize;

    for row in rows {
        if !retained.contains(&row.games_id) {
            rows_dropped += 1;
            continue;
        }
        let computed = row.gold + row.silver + row.bronze;
        let total = match row.total {
            Some(total) if total == computed => total,
            Some(total) => {
                totals_recomputed += 1;
                debug!(
                    games_id = row.games_id,
                    noc = %row.noc,
                    source_total = total,
                    computed,
                    "source medal total disagrees with component sum; recomputed"
                );
                computed
            }
            None => {
                totals_recomputed += 1;
                computed
            }
        };
        tallies.push(MedalTally {
            games_id: row.games_id,
            noc: row.noc.clone(),
            gold: row.gold,
            silver: row.silver,
            bronze: row.bronze,
            total,
        });
    }

    debug!(
        retained = tallies.len(),
        rows_dropped, totals_recomputed, "medal normalization complete"
    );
    NormalizedMedals {
        tallies,
        rows_dropped,
        totals_recomputed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::{CountryProfile, HostCountry, NocCode};

    fn registry() -> CountryRegistry {
        CountryRegistry::new(vec![
            CountryProfile::new(NocCode::new("GRE").unwrap(), "Greece"),
            CountryProfile::new(NocCode::new("FRA").unwrap(), "France"),
        ])
    }

    fn games_row(id: i64, edition: &str, year: i32, city: &str, country: &str) -> RawGamesRow {
        RawGamesRow {
            id,
            edition: edition.to_string(),
            year,
            host_city: city.to_string(),
            host_country: country.to_string(),
        }
    }

    #[test]
    fn only_summer_editions_are_retained() {
        let rows = vec![
            games_row(1, "Summer 1896", 1896, "Athens", "GRE"),
            games_row(2, "Winter 1924", 1924, "Chamonix", "FRA"),
        ];
        let normalized = normalize_games(&rows, &registry());
        assert_eq!(normalized.editions.len(), 1);
        let edition = &normalized.editions[0];
        assert_eq!(edition.year, 1896);
        assert_eq!(edition.season, Season::Summer);
    }

    #[test]
    fn unresolved_hosts_are_kept_with_their_label() {
        let rows = vec![games_row(1, "Summer 1896", 1896, "Athens", "GRE")];
        let normalized = normalize_games(&rows, &registry());
        // "GRE" is a code, not a display name; it resolves to nothing.
        assert_eq!(
            normalized.editions[0].host_country,
            HostCountry::Unresolved("GRE".to_string())
        );
        assert_eq!(normalized.reconcile_stats.unresolved, 1);
    }

    #[test]
    fn resolved_hosts_carry_the_registered_spelling() {
        let rows = vec![games_row(3, "Summer 1900", 1900, "Paris", "FRANCE")];
        let normalized = normalize_games(&rows, &registry());
        assert_eq!(
            normalized.editions[0].host_country,
            HostCountry::Resolved("France".to_string())
        );
    }

    #[test]
    fn season_normalization_is_idempotent_over_summer_input() {
        let rows = vec![
            games_row(1, "Summer 1896", 1896, "Athens", "Greece"),
            games_row(3, "Summer 1900", 1900, "Paris", "France"),
        ];
        let first = normalize_games(&rows, &registry());
        let again: Vec<RawGamesRow> = first
            .editions
            .iter()
            .map(|e| {
                games_row(
                    e.id,
                    &format!("Summer {}", e.year),
                    e.year,
                    &e.host_city,
                    e.host_country.label(),
                )
            })
            .collect();
        let second = normalize_games(&again, &registry());
        assert_eq!(second.editions, first.editions);
    }

    fn medal_row(games_id: i64, noc: &str, g: u32, s: u32, b: u32, total: Option<u32>) -> RawMedalRow {
        RawMedalRow {
            games_id,
            noc: NocCode::new(noc).unwrap(),
            gold: g,
            silver: s,
            bronze: b,
            total,
        }
    }

    fn summer_edition(id: i64, year: i32) -> GamesEdition {
        GamesEdition {
            id,
            year,
            host_city: "Athens".to_string(),
            host_country: HostCountry::Resolved("Greece".to_string()),
            season: Season::Summer,
        }
    }

    #[test]
    fn medal_rows_for_unretained_editions_are_dropped() {
        let editions = vec![summer_edition(10, 1896)];
        let rows = vec![
            medal_row(10, "GRE", 10, 17, 19, Some(46)),
            medal_row(99, "FRA", 1, 2, 3, Some(6)),
        ];
        let normalized = normalize_medals(&rows, &editions);
        assert_eq!(normalized.tallies.len(), 1);
        assert_eq!(normalized.tallies[0].games_id, 10);
        assert_eq!(normalized.rows_dropped, 1);
    }

    #[test]
    fn totals_are_recomputed_when_missing_or_inconsistent() {
        let editions = vec![summer_edition(10, 1896)];
        let rows = vec![
            medal_row(10, "GRE", 10, 17, 19, Some(46)),
            medal_row(10, "FRA", 5, 4, 2, Some(99)),
            medal_row(10, "USA", 11, 7, 2, None),
        ];
        let normalized = normalize_medals(&rows, &editions);
        assert_eq!(normalized.totals_recomputed, 2);
        for tally in &normalized.tallies {
            assert_eq!(tally.total, tally.computed_total());
        }
    }
}
