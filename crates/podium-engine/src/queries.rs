//! Stateless analytical queries over the normalized tables.
//!
//! Every function reads `&EngineContext` (or a slice of athlete events)
//! and returns an owned payload; nothing here mutates shared state.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use podium_model::{
    AthleteEvent, CountryProfile, GamesEdition, HostCountry, MedalKind, MedalTally, NocCode,
    PodiumError, Result, Season,
};

use crate::context::EngineContext;
use crate::registry::CountryRegistry;

/// First year of the modern Games; host-performance timelines start here.
pub const FIRST_OLYMPIC_YEAR: i32 = 1896;

/// Categories listed in the event data that award no sport medals.
pub const EXCLUDED_SPORTS: &[&str] = &["Art Competitions"];

/// Presentation-only renames applied to display names. The underlying NOC
/// code is untouched, so joins are unaffected.
const DISPLAY_ALIASES: &[(&str, &str)] = &[("People's Republic of China", "China")];

fn apply_display_alias(name: String) -> String {
    for (from, to) in DISPLAY_ALIASES {
        if name == *from {
            return (*to).to_string();
        }
    }
    name
}

/// Registered countries sorted by display name.
pub fn countries(ctx: &EngineContext) -> Vec<CountryProfile> {
    let mut profiles = ctx.registry().profiles().to_vec();
    profiles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.noc.cmp(&b.noc)));
    profiles
}

/// Retained Summer editions, year ascending.
pub fn summer_editions(ctx: &EngineContext) -> Vec<GamesEdition> {
    ctx.editions().to_vec()
}

/// Distinct Summer years, ascending.
pub fn summer_years(ctx: &EngineContext) -> Vec<i32> {
    let years: BTreeSet<i32> = ctx.editions().iter().map(|e| e.year).collect();
    years.into_iter().collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct HostCityRow {
    pub year: i32,
    pub city: String,
    pub country: String,
}

/// Host city per Summer edition, year ascending.
pub fn host_cities(ctx: &EngineContext) -> Vec<HostCityRow> {
    ctx.editions()
        .iter()
        .map(|e| HostCityRow {
            year: e.year,
            city: e.host_city.clone(),
            country: e.host_country.label().to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MedalTallyRow {
    pub noc: NocCode,
    pub games_id: i64,
    pub year: i32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
    pub host_country: String,
}

/// Full medal tally joined with its edition, ordered by year ascending
/// then total descending.
pub fn medal_tally(ctx: &EngineContext) -> Vec<MedalTallyRow> {
    let mut rows: Vec<MedalTallyRow> = ctx
        .medals()
        .iter()
        .filter_map(|tally| {
            let edition = ctx.edition_by_id(tally.games_id)?;
            Some(MedalTallyRow {
                noc: tally.noc.clone(),
                games_id: tally.games_id,
                year: edition.year,
                gold: tally.gold,
                silver: tally.silver,
                bronze: tally.bronze,
                total: tally.total,
                host_country: edition.host_country.label().to_string(),
            })
        })
        .collect();
    rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| b.total.cmp(&a.total)));
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTally {
    pub year: i32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

/// Medal history for one country, year ascending.
///
/// The country is addressed by display name, as the dashboard presents it;
/// an unknown name is a `NotFound`, the 404-equivalent signal.
pub fn country_medal_history(ctx: &EngineContext, name: &str) -> Result<Vec<YearTally>> {
    let noc = ctx
        .registry()
        .code_for_name(name)
        .ok_or_else(|| PodiumError::NotFound {
            kind: "country",
            name: name.to_string(),
        })?;

    let mut rows: Vec<YearTally> = ctx
        .medals()
        .iter()
        .filter(|tally| tally.noc == *noc)
        .filter_map(|tally| {
            let edition = ctx.edition_by_id(tally.games_id)?;
            Some(YearTally {
                year: edition.year,
                gold: tally.gold,
                silver: tally.silver,
                bronze: tally.bronze,
                total: tally.gold + tally.silver + tally.bronze,
            })
        })
        .collect();
    rows.sort_by_key(|r| r.year);
    Ok(rows)
}

/// One step of a host's timeline. Missing data is `None` throughout, which
/// serializes to null: a Games the country sent no medal-winning team to
/// is distinct from a Games where it won zero medals.
#[derive(Debug, Clone, Serialize)]
pub struct PerformancePoint {
    pub year: i32,
    pub gold: Option<u32>,
    pub silver: Option<u32>,
    pub bronze: Option<u32>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostPerformance {
    pub host_country: String,
    pub host_code: Option<NocCode>,
    pub host_year: i32,
    pub resolved: bool,
    pub performance: Vec<PerformancePoint>,
}

/// Per-host medal timeline covering every Olympic year from 1896 to the
/// latest retained year in steps of four.
///
/// The step is fixed regardless of missed Games: war-year gaps appear as
/// no-data placeholders, not as truncation. Hosts whose label never
/// resolved are retained and marked, with no code guessed for them.
pub fn host_performance_timeline(ctx: &EngineContext) -> Vec<HostPerformance> {
    let Some(latest_year) = ctx.editions().iter().map(|e| e.year).max() else {
        return Vec::new();
    };

    ctx.editions()
        .iter()
        .map(|edition| {
            let host_code = match &edition.host_country {
                HostCountry::Resolved(name) => ctx.registry().code_for_name(name).cloned(),
                HostCountry::Unresolved(_) => None,
            };

            let by_year: HashMap<i32, &MedalTally> = match &host_code {
                Some(code) => ctx
                    .medals()
                    .iter()
                    .filter(|tally| tally.noc == *code)
                    .filter_map(|tally| {
                        ctx.edition_by_id(tally.games_id)
                            .map(|e| (e.year, tally))
                    })
                    .collect(),
                None => HashMap::new(),
            };

            let performance = (FIRST_OLYMPIC_YEAR..=latest_year)
                .step_by(4)
                .map(|year| match by_year.get(&year) {
                    Some(tally) => PerformancePoint {
                        year,
                        gold: Some(tally.gold),
                        silver: Some(tally.silver),
                        bronze: Some(tally.bronze),
                        total: Some(tally.total),
                    },
                    None => PerformancePoint {
                        year,
                        gold: None,
                        silver: None,
                        bronze: None,
                        total: None,
                    },
                })
                .collect();

            HostPerformance {
                host_country: edition.host_country.label().to_string(),
                resolved: edition.host_country.is_resolved(),
                host_code,
                host_year: edition.year,
                performance,
            }
        })
        .collect()
}

/// Distinct Summer sports, sorted, minus the non-medal categories.
pub fn sports(events: &[AthleteEvent]) -> Vec<String> {
    let mut names: BTreeSet<&str> = events
        .iter()
        .filter(|e| e.season() == Season::Summer)
        .map(|e| e.sport.as_str())
        .collect();
    for excluded in EXCLUDED_SPORTS {
        names.remove(excluded);
    }
    names.into_iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportMedalRow {
    pub year: i32,
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// Per-(year, country) medal counts for one sport over Summer events.
///
/// Returns an empty vec, not an error, when the sport has no matching
/// records.
pub fn sport_medals(
    registry: &CountryRegistry,
    events: &[AthleteEvent],
    sport: &str,
) -> Vec<SportMedalRow> {
    let mut counts: BTreeMap<(i32, NocCode), (u32, u32, u32)> = BTreeMap::new();

    for event in events {
        if event.season() != Season::Summer || event.sport != sport {
            continue;
        }
        let Some(medal) = event.medal else {
            continue;
        };
        let entry = counts.entry((event.year, event.noc.clone())).or_default();
        match medal {
            MedalKind::Gold => entry.0 += 1,
            MedalKind::Silver => entry.1 += 1,
            MedalKind::Bronze => entry.2 += 1,
        }
    }

    counts
        .into_iter()
        .map(|((year, noc), (gold, silver, bronze))| SportMedalRow {
            year,
            country: apply_display_alias(registry.display_name_or_code(&noc)),
            gold,
            silver,
            bronze,
        })
        .collect()
}
