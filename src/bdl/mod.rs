//! balldontlie API integration: HTTP client, wire types, caching, and the
//! advanced-metrics calculator.

pub mod cache_averages;
pub mod compute;
pub mod http;
pub mod types;
