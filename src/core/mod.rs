//! Core utilities for the NBA Season Stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching utilities

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{season_averages_path, try_read_to_string, write_string};
