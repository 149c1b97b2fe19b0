//! Typed dataset loaders.
//!
//! Each loader resolves the source's column scheme through the ordered
//! adapter list, then converts rows to model types. Rows with unparsable
//! required keys are skipped with a diagnostic, never fatal; skip counts
//! are reported per load.

use serde::Serialize;
use tracing::warn;

use podium_model::{AthleteEvent, CountryProfile, MedalKind, NocCode, RawGamesRow, RawMedalRow};

use crate::csv_table::CsvTable;
use crate::error::Result;
use crate::parse::{extract_year, parse_i64, parse_u32};
use crate::schema::{ColumnMap, SchemaAdapter, resolve_schema};

/// Per-load diagnostics surfaced in the CLI summary.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub dataset: String,
    pub adapter: String,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
}

impl LoadReport {
    fn new(dataset: &str, map: &ColumnMap) -> Self {
        Self {
            dataset: dataset.to_string(),
            adapter: map.adapter.to_string(),
            rows_loaded: 0,
            rows_skipped: 0,
        }
    }

    fn skip(&mut self, row_number: usize, reason: &str) {
        self.rows_skipped += 1;
        warn!(
            dataset = %self.dataset,
            row = row_number,
            reason,
            "skipping unparsable row"
        );
    }
}

/// Empty count cells mean zero; non-empty cells must parse.
fn parse_count(cell: &str) -> Option<u32> {
    if cell.trim().is_empty() {
        Some(0)
    } else {
        parse_u32(cell)
    }
}

const COUNTRY_ADAPTERS: &[SchemaAdapter] = &[
    SchemaAdapter {
        name: "lowercase",
        required: &[("noc", "noc"), ("country", "country")],
        optional: &[],
    },
    SchemaAdapter {
        name: "capitalized",
        required: &[("noc", "NOC"), ("country", "Country")],
        optional: &[],
    },
];

pub fn load_country_profiles(table: &CsvTable) -> Result<(Vec<CountryProfile>, LoadReport)> {
    let map = resolve_schema("country profiles", &table.headers, COUNTRY_ADAPTERS)?;
    let mut report = LoadReport::new("country profiles", &map);
    let mut profiles = Vec::with_capacity(table.rows.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let Ok(noc) = NocCode::new(map.get("noc", row)) else {
            report.skip(idx + 1, "blank NOC code");
            continue;
        };
        let name = map.get("country", row);
        if name.is_empty() {
            report.skip(idx + 1, "blank country name");
            continue;
        }
        profiles.push(CountryProfile::new(noc, name));
        report.rows_loaded += 1;
    }

    Ok((profiles, report))
}

const GAMES_ADAPTERS: &[SchemaAdapter] = &[
    SchemaAdapter {
        name: "lowercase",
        required: &[
            ("edition", "edition"),
            ("id", "edition_id"),
            ("year", "year"),
            ("city", "city"),
            ("country", "country_noc"),
        ],
        optional: &[],
    },
    SchemaAdapter {
        name: "capitalized",
        required: &[
            ("edition", "edition"),
            ("id", "Games_ID"),
            ("year", "Year"),
            ("city", "Host_city"),
            ("country", "Host_country"),
        ],
        optional: &[],
    },
];

pub fn load_games_rows(table: &CsvTable) -> Result<(Vec<RawGamesRow>, LoadReport)> {
    let map = resolve_schema("games summary", &table.headers, GAMES_ADAPTERS)?;
    let mut report = LoadReport::new("games summary", &map);
    let mut rows = Vec::with_capacity(table.rows.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let edition = map.get("edition", row).to_string();
        let Some(id) = parse_i64(map.get("id", row)) else {
            report.skip(idx + 1, "unparsable edition id");
            continue;
        };
        let year = parse_i64(map.get("year", row))
            .and_then(|y| i32::try_from(y).ok())
            .or_else(|| extract_year(&edition));
        let Some(year) = year else {
            report.skip(idx + 1, "no year in row or edition label");
            continue;
        };
        rows.push(RawGamesRow {
            id,
            edition,
            year,
            host_city: map.get("city", row).to_string(),
            host_country: map.get("country", row).to_string(),
        });
        report.rows_loaded += 1;
    }

    Ok((rows, report))
}

const MEDAL_ADAPTERS: &[SchemaAdapter] = &[
    SchemaAdapter {
        name: "lowercase",
        required: &[
            ("id", "edition_id"),
            ("noc", "country_noc"),
            ("gold", "gold"),
            ("silver", "silver"),
            ("bronze", "bronze"),
        ],
        optional: &[("total", "total")],
    },
    SchemaAdapter {
        name: "capitalized",
        required: &[
            ("id", "Games_ID"),
            ("noc", "NOC"),
            ("gold", "Gold"),
            ("silver", "Silver"),
            ("bronze", "Bronze"),
        ],
        optional: &[("total", "Total")],
    },
];

pub fn load_medal_rows(table: &CsvTable) -> Result<(Vec<RawMedalRow>, LoadReport)> {
    let map = resolve_schema("medal tally", &table.headers, MEDAL_ADAPTERS)?;
    let mut report = LoadReport::new("medal tally", &map);
    let mut rows = Vec::with_capacity(table.rows.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let Some(games_id) = parse_i64(map.get("id", row)) else {
            report.skip(idx + 1, "unparsable edition id");
            continue;
        };
        let Ok(noc) = NocCode::new(map.get("noc", row)) else {
            report.skip(idx + 1, "blank NOC code");
            continue;
        };
        let (Some(gold), Some(silver), Some(bronze)) = (
            parse_count(map.get("gold", row)),
            parse_count(map.get("silver", row)),
            parse_count(map.get("bronze", row)),
        ) else {
            report.skip(idx + 1, "unparsable medal count");
            continue;
        };
        let total = if map.index("total").is_some() {
            parse_count(map.get("total", row)).filter(|t| *t > 0)
        } else {
            None
        };
        rows.push(RawMedalRow {
            games_id,
            noc,
            gold,
            silver,
            bronze,
            total,
        });
        report.rows_loaded += 1;
    }

    Ok((rows, report))
}

const ATHLETE_EVENT_ADAPTERS: &[SchemaAdapter] = &[
    SchemaAdapter {
        name: "lowercase",
        required: &[
            ("edition", "edition"),
            ("noc", "country_noc"),
            ("sport", "sport"),
            ("medal", "medal"),
        ],
        optional: &[("year", "year")],
    },
    SchemaAdapter {
        name: "lowercase-noc",
        required: &[
            ("edition", "edition"),
            ("noc", "noc"),
            ("sport", "sport"),
            ("medal", "medal"),
        ],
        optional: &[("year", "year")],
    },
    SchemaAdapter {
        name: "capitalized",
        required: &[
            ("edition", "Edition"),
            ("noc", "NOC"),
            ("sport", "Sport"),
            ("medal", "Medal"),
        ],
        optional: &[("year", "Year")],
    },
];

pub fn load_athlete_events(table: &CsvTable) -> Result<(Vec<AthleteEvent>, LoadReport)> {
    let map = resolve_schema("athlete events", &table.headers, ATHLETE_EVENT_ADAPTERS)?;
    let mut report = LoadReport::new("athlete events", &map);
    let mut events = Vec::with_capacity(table.rows.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let edition = map.get("edition", row).to_string();
        let year = parse_i64(map.get("year", row))
            .and_then(|y| i32::try_from(y).ok())
            .or_else(|| extract_year(&edition));
        let Some(year) = year else {
            report.skip(idx + 1, "no year in row or edition label");
            continue;
        };
        let Ok(noc) = NocCode::new(map.get("noc", row)) else {
            report.skip(idx + 1, "blank NOC code");
            continue;
        };
        let sport = map.get("sport", row);
        if sport.is_empty() {
            report.skip(idx + 1, "blank sport");
            continue;
        }
        events.push(AthleteEvent {
            edition,
            year,
            noc,
            sport: sport.to_string(),
            medal: MedalKind::parse(map.get("medal", row)),
        });
        report.rows_loaded += 1;
    }

    Ok((events, report))
}
