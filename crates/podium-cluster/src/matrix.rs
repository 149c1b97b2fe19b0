//! Country × sport co-occurrence heatmap.
//!
//! Counts medals per (country, sport) pair over Summer athlete events,
//! restricts to the top countries, and orders both axes by Ward-linkage
//! cluster membership so related rows and columns sit together in the
//! rendered heatmap.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use podium_engine::CountryRegistry;
use podium_model::{AthleteEvent, MedalKind, NocCode, PodiumError, Season};

use crate::hierarchy::ward_cluster;

/// Named year ranges offered by the dashboard, with inclusive bounds.
pub const YEAR_RANGES: &[(&str, (i32, i32))] = &[
    ("all", (1896, 2022)),
    ("recent", (2000, 2022)),
    ("1990s", (1990, 1999)),
    ("1980s", (1980, 1989)),
    ("1970s", (1970, 1979)),
    ("historical", (1896, 1969)),
];

pub const DEFAULT_YEAR_RANGE: &str = "recent";

/// Dendrogram cut targets for the two axes.
pub const COUNTRY_CLUSTER_COUNT: usize = 3;
pub const SPORT_CLUSTER_COUNT: usize = 5;

/// Inclusive bounds for a named range; unknown names get the default.
pub fn year_bounds(name: &str) -> (i32, i32) {
    YEAR_RANGES
        .iter()
        .find(|(range, _)| *range == name)
        .or_else(|| YEAR_RANGES.iter().find(|(range, _)| *range == DEFAULT_YEAR_RANGE))
        .map(|(_, bounds)| *bounds)
        .unwrap_or((1896, 2022))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalFilter {
    #[default]
    Total,
    Gold,
    Silver,
    Bronze,
}

impl MedalFilter {
    fn admits(self, kind: MedalKind) -> bool {
        match self {
            MedalFilter::Total => true,
            MedalFilter::Gold => kind == MedalKind::Gold,
            MedalFilter::Silver => kind == MedalKind::Silver,
            MedalFilter::Bronze => kind == MedalKind::Bronze,
        }
    }
}

impl FromStr for MedalFilter {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" => Ok(MedalFilter::Total),
            "gold" => Ok(MedalFilter::Gold),
            "silver" => Ok(MedalFilter::Silver),
            "bronze" => Ok(MedalFilter::Bronze),
            other => Err(PodiumError::NotFound {
                kind: "medal filter",
                name: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatrixRequest {
    pub medal: MedalFilter,
    pub year_range: String,
    pub country_count: usize,
}

impl Default for MatrixRequest {
    fn default() -> Self {
        Self {
            medal: MedalFilter::Total,
            year_range: DEFAULT_YEAR_RANGE.to_string(),
            country_count: 25,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapCell {
    pub noc: NocCode,
    pub country: String,
    pub sport: String,
    pub value: u64,
    pub country_cluster: usize,
    pub sport_cluster: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapPayload {
    pub cells: Vec<HeatmapCell>,
    /// Row order after clustering.
    pub countries: Vec<NocCode>,
    /// Column order after clustering.
    pub sports: Vec<String>,
    pub max_value: u64,
    pub year_range: String,
    pub year_min: i32,
    pub year_max: i32,
    /// Set when the filtered input was too small to cluster.
    pub diagnostic: Option<String>,
}

impl HeatmapPayload {
    fn empty(request: &MatrixRequest, bounds: (i32, i32), diagnostic: String) -> Self {
        debug!(
            year_range = %request.year_range,
            %diagnostic,
            "heatmap input degenerate; returning empty payload"
        );
        Self {
            cells: Vec::new(),
            countries: Vec::new(),
            sports: Vec::new(),
            max_value: 0,
            year_range: request.year_range.clone(),
            year_min: bounds.0,
            year_max: bounds.1,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Builds the clustered co-occurrence heatmap payload.
///
/// Clustering requires at least two observations per axis; anything
/// smaller yields an empty payload with a diagnostic instead.
pub fn build_heatmap(
    registry: &CountryRegistry,
    events: &[AthleteEvent],
    request: &MatrixRequest,
) -> HeatmapPayload {
    let bounds = year_bounds(&request.year_range);
    let (year_min, year_max) = bounds;

    let mut pair_counts: BTreeMap<(NocCode, String), u64> = BTreeMap::new();
    let mut country_totals: BTreeMap<NocCode, u64> = BTreeMap::new();
    for event in events {
        if event.season() != Season::Summer {
            continue;
        }
        if event.year < year_min || event.year > year_max {
            continue;
        }
        let Some(kind) = event.medal else {
            continue;
        };
        if !request.medal.admits(kind) {
            continue;
        }
        *pair_counts
            .entry((event.noc.clone(), event.sport.clone()))
            .or_default() += 1;
        *country_totals.entry(event.noc.clone()).or_default() += 1;
    }

    if pair_counts.is_empty() {
        return HeatmapPayload::empty(
            request,
            bounds,
            "no medal records match the requested filters".to_string(),
        );
    }

    // Top-N countries by total medal count; ties break toward the lower code.
    let mut ranked: Vec<(&NocCode, u64)> = country_totals
        .iter()
        .map(|(noc, count)| (noc, *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let selected: BTreeSet<NocCode> = ranked
        .into_iter()
        .take(request.country_count)
        .map(|(noc, _)| noc.clone())
        .collect();

    let sports: BTreeSet<String> = pair_counts
        .iter()
        .filter(|((noc, _), _)| selected.contains(noc))
        .map(|((_, sport), _)| sport.clone())
        .collect();

    if selected.len() < 2 {
        return HeatmapPayload::empty(
            request,
            bounds,
            format!("only {} country in the filtered set", selected.len()),
        );
    }
    if sports.len() < 2 {
        return HeatmapPayload::empty(
            request,
            bounds,
            format!("only {} sport in the filtered set", sports.len()),
        );
    }

    let row_labels: Vec<NocCode> = selected.into_iter().collect();
    let col_labels: Vec<String> = sports.into_iter().collect();

    let matrix: Vec<Vec<f64>> = row_labels
        .iter()
        .map(|noc| {
            col_labels
                .iter()
                .map(|sport| {
                    pair_counts
                        .get(&(noc.clone(), sport.clone()))
                        .copied()
                        .unwrap_or(0) as f64
                })
                .collect()
        })
        .collect();
    let transposed: Vec<Vec<f64>> = (0..col_labels.len())
        .map(|ci| matrix.iter().map(|row| row[ci]).collect())
        .collect();

    let country_clusters = ward_cluster(&matrix, COUNTRY_CLUSTER_COUNT);
    let sport_clusters = ward_cluster(&transposed, SPORT_CLUSTER_COUNT);

    // Stable sort: ties keep the alphabetical base order.
    let mut row_order: Vec<usize> = (0..row_labels.len()).collect();
    row_order.sort_by_key(|&i| country_clusters[i]);
    let mut col_order: Vec<usize> = (0..col_labels.len()).collect();
    col_order.sort_by_key(|&i| sport_clusters[i]);

    let mut cells = Vec::with_capacity(row_order.len() * col_order.len());
    let mut max_value = 0u64;
    for &ri in &row_order {
        for &ci in &col_order {
            let value = matrix[ri][ci] as u64;
            max_value = max_value.max(value);
            cells.push(HeatmapCell {
                noc: row_labels[ri].clone(),
                country: registry.display_name_or_code(&row_labels[ri]),
                sport: col_labels[ci].clone(),
                value,
                country_cluster: country_clusters[ri],
                sport_cluster: sport_clusters[ci],
            });
        }
    }

    HeatmapPayload {
        cells,
        countries: row_order.iter().map(|&i| row_labels[i].clone()).collect(),
        sports: col_order.iter().map(|&i| col_labels[i].clone()).collect(),
        max_value,
        year_range: request.year_range.clone(),
        year_min,
        year_max,
        diagnostic: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::CountryProfile;

    fn registry() -> CountryRegistry {
        CountryRegistry::new(vec![
            CountryProfile::new(NocCode::new("USA").unwrap(), "United States"),
            CountryProfile::new(NocCode::new("GRE").unwrap(), "Greece"),
            CountryProfile::new(NocCode::new("FRA").unwrap(), "France"),
        ])
    }

    fn event(year: i32, noc: &str, sport: &str, medal: &str) -> AthleteEvent {
        AthleteEvent {
            edition: format!("{year} Summer Olympics"),
            year,
            noc: NocCode::new(noc).unwrap(),
            sport: sport.to_string(),
            medal: MedalKind::parse(medal),
        }
    }

    fn sample_events() -> Vec<AthleteEvent> {
        let mut events = Vec::new();
        for _ in 0..8 {
            events.push(event(2004, "USA", "Swimming", "Gold"));
        }
        for _ in 0..5 {
            events.push(event(2004, "USA", "Athletics", "Silver"));
        }
        for _ in 0..6 {
            events.push(event(2008, "GRE", "Rowing", "Gold"));
        }
        for _ in 0..3 {
            events.push(event(2008, "FRA", "Swimming", "Gold"));
        }
        events
    }

    #[test]
    fn builds_a_dense_matrix_over_selected_countries() {
        let payload = build_heatmap(&registry(), &sample_events(), &MatrixRequest::default());
        assert!(payload.diagnostic.is_none());
        assert_eq!(payload.countries.len(), 3);
        assert_eq!(payload.sports.len(), 3);
        assert_eq!(payload.cells.len(), 9);
        assert_eq!(payload.max_value, 8);
        // Missing pairs are zero-filled, not absent.
        let fra_rowing = payload
            .cells
            .iter()
            .find(|c| c.noc.as_str() == "FRA" && c.sport == "Rowing")
            .unwrap();
        assert_eq!(fra_rowing.value, 0);
    }

    #[test]
    fn country_count_caps_the_rows() {
        let request = MatrixRequest {
            country_count: 2,
            ..MatrixRequest::default()
        };
        let payload = build_heatmap(&registry(), &sample_events(), &request);
        assert_eq!(payload.countries.len(), 2);
        // USA (13 medals) and GRE (6) outrank FRA (3).
        assert!(payload.countries.iter().any(|c| c.as_str() == "USA"));
        assert!(payload.countries.iter().any(|c| c.as_str() == "GRE"));
    }

    #[test]
    fn cluster_ids_stay_in_their_target_ranges() {
        let payload = build_heatmap(&registry(), &sample_events(), &MatrixRequest::default());
        for cell in &payload.cells {
            assert!((1..=COUNTRY_CLUSTER_COUNT).contains(&cell.country_cluster));
            assert!((1..=SPORT_CLUSTER_COUNT).contains(&cell.sport_cluster));
        }
    }

    #[test]
    fn medal_filter_restricts_the_counts() {
        let request = MatrixRequest {
            medal: MedalFilter::Gold,
            ..MatrixRequest::default()
        };
        let payload = build_heatmap(&registry(), &sample_events(), &request);
        // The silver-only Athletics column disappears under a gold filter.
        assert!(payload.diagnostic.is_none());
        assert_eq!(payload.max_value, 8);
        assert!(payload.sports.iter().all(|s| s != "Athletics"));
        assert_eq!(payload.sports.len(), 2);
    }

    #[test]
    fn empty_and_single_axis_inputs_are_degenerate() {
        let registry = registry();
        let none = build_heatmap(&registry, &[], &MatrixRequest::default());
        assert!(none.cells.is_empty());
        assert!(none.diagnostic.is_some());

        // One country, one sport.
        let single = vec![event(2004, "USA", "Swimming", "Gold")];
        let payload = build_heatmap(&registry, &single, &MatrixRequest::default());
        assert!(payload.cells.is_empty());
        assert!(payload.diagnostic.is_some());

        // Winter-only records never reach the matrix.
        let winter = vec![AthleteEvent {
            edition: "1994 Winter Olympics".to_string(),
            year: 1994,
            noc: NocCode::new("NOR").unwrap(),
            sport: "Biathlon".to_string(),
            medal: Some(MedalKind::Gold),
        }];
        let payload = build_heatmap(&registry, &winter, &MatrixRequest::default());
        assert!(payload.cells.is_empty());
    }

    #[test]
    fn unknown_year_range_falls_back_to_recent() {
        assert_eq!(year_bounds("recent"), (2000, 2022));
        assert_eq!(year_bounds("1990s"), (1990, 1999));
        assert_eq!(year_bounds("no-such-range"), (2000, 2022));
    }
}
