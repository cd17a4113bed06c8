use serde_json::Value;

use crate::bdl::http::BdlClient;
use crate::core::{season_averages_path, try_read_to_string, write_string};
use crate::{
    cli::types::{PlayerId, Season},
    Result,
};

/// Try to load a season-average record from the disk cache first. If missing
/// or `refresh == true`, fetch from the API and re-write the cache.
///
/// The cache stores the raw record payload; validation into
/// [`crate::bdl::types::BasicStats`] happens on every read so stale or
/// malformed cache entries still surface as data errors.
pub async fn load_or_fetch_season_averages(
    client: &BdlClient,
    player_id: PlayerId,
    season: Season,
    refresh: bool,
) -> Result<Option<Value>> {
    let path = season_averages_path(season.as_u16(), player_id.as_u64());

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            if let Ok(record) = serde_json::from_str::<Value>(&s) {
                return Ok(Some(record));
            }
        }
    }

    // 2) Fetch from API
    let record = client.season_averages(player_id, season).await?;

    // 3) Write cache (raw record, so future reads revalidate the same payload)
    if let Some(record) = &record {
        if let Ok(json_str) = serde_json::to_string_pretty(record) {
            let _ = write_string(&path, &json_str);
        }
    }

    Ok(record)
}
