//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Season;

/// Common arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// balldontlie API key (or set `BDL_STATS_API_KEY` env var).
    #[clap(long, short)]
    pub api_key: Option<String>,

    /// Player name to search for (substring match against full names).
    #[clap(long, short = 'n')]
    pub name: String,

    /// Season year (e.g. 2024). Defaults to the current calendar year.
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Search for players by name.
    ///
    /// Queries `/players?search=` and prints each matching player identity.
    Players {
        /// balldontlie API key (or set `BDL_STATS_API_KEY` env var).
        #[clap(long, short)]
        api_key: Option<String>,

        /// Player name to search for.
        #[clap(long, short = 'n')]
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Get a player's per-game season averages.
    ///
    /// Resolves the name via `/players?search=`, then queries
    /// `/season_averages` for each match (read from cache or fetched if
    /// missing).
    SeasonAverages {
        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the API, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// Get a player's season averages plus derived advanced metrics.
    ///
    /// Computes True Shooting %, estimated Usage Rate, Assist/Turnover
    /// Ratio, and Points per Shot Attempt from the season averages.
    AdvancedStats {
        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the API, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "bdl-stats", about = "NBA season stats CLI (balldontlie API)")]
pub struct Bdl {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the balldontlie API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
