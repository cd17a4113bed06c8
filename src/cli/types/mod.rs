//! Type-safe wrappers for balldontlie identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::PlayerId;
pub use time::Season;
