//! Reconciliation and analytical aggregation over Olympic datasets.
//!
//! The engine builds an immutable [`EngineContext`] once at startup
//! (registry construction, Summer-only season normalization, medal
//! normalization) and then answers stateless queries over it.

pub mod context;
pub mod normalize;
pub mod queries;
pub mod reconcile;
pub mod registry;
pub mod state;

pub use context::{BuildStats, EngineContext};
pub use normalize::{NormalizedGames, NormalizedMedals, normalize_games, normalize_medals};
pub use queries::{
    EXCLUDED_SPORTS, FIRST_OLYMPIC_YEAR, HostCityRow, HostPerformance, MedalTallyRow,
    PerformancePoint, SportMedalRow, YearTally, countries, country_medal_history, host_cities,
    host_performance_timeline, medal_tally, sport_medals, sports, summer_editions, summer_years,
};
pub use reconcile::{
    ReconcileOutcome, ReconcileStats, Reconciler, SIMILARITY_THRESHOLD, positional_overlap,
};
pub use registry::CountryRegistry;
pub use state::DashboardState;
