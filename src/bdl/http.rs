//! HTTP client for the balldontlie API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use serde_json::Value;

use crate::bdl::types::{DataEnvelope, Player};
use crate::cli::types::{PlayerId, Season};
use crate::error::{BdlError, Result};

/// Base path for the balldontlie v1 API.
pub const BDL_BASE_URL: &str = "https://www.balldontlie.io/api/v1";

/// Explicit client configuration. The API credential and base URL are passed
/// in here rather than read from ambient process state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: BDL_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used against a local stub in tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Map an unsuccessful response status to an error kind.
fn classify_status(status: StatusCode) -> Option<BdlError> {
    match status {
        StatusCode::UNAUTHORIZED => Some(BdlError::Auth),
        StatusCode::TOO_MANY_REQUESTS => Some(BdlError::RateLimited),
        s if !s.is_success() => Some(BdlError::Api { status: s.as_u16() }),
        _ => None,
    }
}

/// Stats provider for the balldontlie API.
pub struct BdlClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl BdlClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
        );

        Ok(Self {
            client: Client::new(),
            base_url: config.base_url,
            headers,
        })
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?;

        if let Some(err) = classify_status(res.status()) {
            return Err(err);
        }

        Ok(res.json::<Value>().await?)
    }

    /// Search for players by name via `/players?search=`.
    pub async fn search_players(&self, name: &str) -> Result<Vec<Player>> {
        let params = [("search", name.to_string())];
        let res = self.get_json("players", &params).await?;

        let envelope: DataEnvelope<Player> = serde_json::from_value(res)?;
        Ok(envelope.data)
    }

    /// Fetch one player's season-average record via `/season_averages`.
    ///
    /// Returns the raw record so the caller owns field validation
    /// ([`crate::bdl::types::BasicStats::from_record`]). `Ok(None)` means the
    /// player has no statistics for that season.
    pub async fn season_averages(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Option<Value>> {
        let params = [
            ("player_ids[]", player_id.as_u64().to_string()),
            ("season", season.as_u16().to_string()),
        ];
        let res = self.get_json("season_averages", &params).await?;

        let mut envelope: DataEnvelope<Value> = serde_json::from_value(res)?;
        if envelope.data.is_empty() {
            Ok(None)
        } else {
            Ok(Some(envelope.data.swap_remove(0)))
        }
    }
}
