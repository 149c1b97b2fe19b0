//! Data model for the Olympic reconciliation and aggregation engine.
//!
//! Leaf crate: domain types, identifiers, the error taxonomy, and the
//! case-insensitive name index shared by the reconciler and registry.

pub mod country;
pub mod error;
pub mod games;
pub mod ids;
pub mod lookup;
pub mod medal;

pub use country::CountryProfile;
pub use error::{PodiumError, Result};
pub use games::{GamesEdition, HostCountry, RawGamesRow, Season};
pub use ids::NocCode;
pub use lookup::CaseInsensitiveIndex;
pub use medal::{AthleteEvent, MedalKind, MedalTally, RawMedalRow};
