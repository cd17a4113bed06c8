//! Error types for the NBA Season Stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BdlError>;

#[derive(Error, Debug)]
pub enum BdlError {
    #[error("invalid API key, please check your API key")]
    Auth,

    #[error("rate limit exceeded, please try again later")]
    RateLimited,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status code {status}")]
    Api { status: u16 },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse season year: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("required statistic '{field}' missing from season-average record")]
    MissingField { field: &'static str },

    #[error("No players found matching '{name}'")]
    PlayerNotFound { name: String },
}
