//! NBA Season Stats CLI Library
//!
//! A Rust library for working with the balldontlie NBA API, providing player
//! search, per-season average statistics, and advanced metrics derived from
//! those averages.
//!
//! ## Features
//!
//! - **Player Search**: Resolve a player name to one or more player identities
//! - **Season Averages**: Fetch per-game average statistics for a season
//! - **Advanced Metrics**: True Shooting %, estimated Usage Rate,
//!   Assist/Turnover Ratio, and Points per Shot Attempt derived from the
//!   basic averages
//! - **Disk Caching**: Fetched season-average records are cached locally
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bdl_stats::{
//!     bdl::{
//!         compute::compute_advanced_stats,
//!         http::{BdlClient, ClientConfig},
//!         types::BasicStats,
//!     },
//!     Season,
//! };
//!
//! # async fn example() -> bdl_stats::Result<()> {
//! let client = BdlClient::new(ClientConfig::new("my-api-key".to_string()))?;
//!
//! let players = client.search_players("LeBron James").await?;
//! if let Some(player) = players.first() {
//!     if let Some(record) = client.season_averages(player.id, Season::new(2024)).await? {
//!         let basic = BasicStats::from_record(&record)?;
//!         let advanced = compute_advanced_stats(&basic);
//!         println!("TS%: {:.2}", advanced.true_shooting_pct);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your balldontlie API key to avoid passing it in every command:
//! ```bash
//! export BDL_STATS_API_KEY=your-key-here
//! ```

pub mod bdl;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use bdl::compute::{compute_advanced_stats, AdvancedStats};
pub use bdl::types::{BasicStats, Player, Team};
pub use cli::types::{PlayerId, Season};
pub use error::{BdlError, Result};

pub const API_KEY_ENV_VAR: &str = "BDL_STATS_API_KEY";
