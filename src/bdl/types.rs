use crate::cli::types::PlayerId;
use crate::error::{BdlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// Top-level envelope: balldontlie wraps every list response in `"data"`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// Team a player belongs to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u64,
    #[serde(rename = "full_name")]
    pub full_name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Player identity from the `/players` search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// Position string; the API returns `""` for players without one.
    #[serde(default)]
    pub position: String,
    pub team: Team,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One validated season-average record for one player.
///
/// All fields are required: a record that lacks any of them is a data error
/// (`MissingField`), never a zero. Construct through [`BasicStats::from_record`],
/// which is the single validation boundary between raw API payloads and the
/// calculator in [`crate::bdl::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasicStats {
    pub games_played: u32,
    /// Minutes per game.
    pub min: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub turnover: f64,
    /// Field goals attempted per game.
    pub fga: f64,
    /// Free throws attempted per game.
    pub fta: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

fn req_f64(record: &Value, field: &'static str) -> Result<f64> {
    record
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(BdlError::MissingField { field })
}

impl BasicStats {
    /// Validate a raw season-average record into a typed stats record.
    ///
    /// Fails with `MissingField` naming the first absent (or non-numeric)
    /// statistic; no partial record is ever produced.
    pub fn from_record(record: &Value) -> Result<Self> {
        let games_played = record
            .get("games_played")
            .and_then(Value::as_u64)
            .ok_or(BdlError::MissingField {
                field: "games_played",
            })? as u32;

        Ok(Self {
            games_played,
            min: req_f64(record, "min")?,
            pts: req_f64(record, "pts")?,
            reb: req_f64(record, "reb")?,
            ast: req_f64(record, "ast")?,
            stl: req_f64(record, "stl")?,
            blk: req_f64(record, "blk")?,
            turnover: req_f64(record, "turnover")?,
            fga: req_f64(record, "fga")?,
            fta: req_f64(record, "fta")?,
            fg_pct: req_f64(record, "fg_pct")?,
            fg3_pct: req_f64(record, "fg3_pct")?,
            ft_pct: req_f64(record, "ft_pct")?,
        })
    }
}
