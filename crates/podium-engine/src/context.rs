//! Process-wide immutable analytical state.

use std::collections::HashMap;

use tracing::info;

use podium_model::{CountryProfile, GamesEdition, MedalTally, RawGamesRow, RawMedalRow};

use crate::normalize::{NormalizedGames, NormalizedMedals, normalize_games, normalize_medals};
use crate::reconcile::ReconcileStats;
use crate::registry::CountryRegistry;

/// Diagnostic counters from the one-time build.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct BuildStats {
    pub reconcile: ReconcileStats,
    pub medal_rows_dropped: usize,
    pub totals_recomputed: usize,
}

/// Registry plus normalized tables, built exactly once at startup and
/// read-only afterwards. Every query function takes `&EngineContext`;
/// nothing mutates it, so no locking is needed across requests.
#[derive(Debug, Clone)]
pub struct EngineContext {
    registry: CountryRegistry,
    editions: Vec<GamesEdition>,
    medals: Vec<MedalTally>,
    edition_index: HashMap<i64, usize>,
    stats: BuildStats,
}

impl EngineContext {
    pub fn build(
        countries: Vec<CountryProfile>,
        games: &[RawGamesRow],
        medals: &[RawMedalRow],
    ) -> Self {
        let registry = CountryRegistry::new(countries);
        let NormalizedGames {
            editions,
            reconcile_stats,
        } = normalize_games(games, &registry);
        let NormalizedMedals {
            tallies,
            rows_dropped,
            totals_recomputed,
        } = normalize_medals(medals, &editions);

        let edition_index = editions
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect();

        info!(
            countries = registry.len(),
            editions = editions.len(),
            medal_records = tallies.len(),
            hosts_corrected = reconcile_stats.corrected,
            hosts_unresolved = reconcile_stats.unresolved,
            "engine context built"
        );

        Self {
            registry,
            editions,
            medals: tallies,
            edition_index,
            stats: BuildStats {
                reconcile: reconcile_stats,
                medal_rows_dropped: rows_dropped,
                totals_recomputed,
            },
        }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Retained Summer editions, sorted by year.
    pub fn editions(&self) -> &[GamesEdition] {
        &self.editions
    }

    pub fn medals(&self) -> &[MedalTally] {
        &self.medals
    }

    pub fn edition_by_id(&self, id: i64) -> Option<&GamesEdition> {
        self.edition_index.get(&id).map(|idx| &self.editions[*idx])
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}
