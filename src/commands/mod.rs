//! Command implementations for the NBA Season Stats CLI

pub mod advanced_stats;
pub mod common;
pub mod players;
pub mod season_averages;

pub use common::{resolve_api_key, AveragesParams};
