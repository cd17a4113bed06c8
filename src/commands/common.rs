//! Common helpers shared across commands.

use serde::Serialize;

use crate::{
    bdl::{
        cache_averages::load_or_fetch_season_averages,
        http::{BdlClient, ClientConfig},
        types::{BasicStats, Player},
    },
    cli::types::Season,
    error::BdlError,
    Result, API_KEY_ENV_VAR,
};

/// Configuration parameters shared by the season-averages and advanced-stats
/// commands.
#[derive(Debug)]
pub struct AveragesParams {
    pub api_key: Option<String>,
    pub name: String,
    pub season: Season,
    pub refresh: bool,
    pub as_json: bool,
}

/// One resolved player together with their (possibly absent) season averages.
#[derive(Debug, Serialize)]
pub struct PlayerAverages {
    pub player: Player,
    pub season: Season,
    pub averages: Option<BasicStats>,
}

/// Resolve the API key from the CLI flag or the `BDL_STATS_API_KEY` env var.
pub fn resolve_api_key(cli_key: Option<String>) -> Result<String> {
    if let Some(key) = cli_key {
        return Ok(key);
    }
    std::env::var(API_KEY_ENV_VAR).map_err(|_| BdlError::MissingApiKey {
        env_var: API_KEY_ENV_VAR.to_string(),
    })
}

/// Build a client from a CLI-provided or env-provided API key.
pub fn build_client(cli_key: Option<String>) -> Result<BdlClient> {
    let api_key = resolve_api_key(cli_key)?;
    BdlClient::new(ClientConfig::new(api_key))
}

/// Resolve a player name and fetch validated season averages for each match.
///
/// Fails with `PlayerNotFound` when the search returns nothing, and with
/// `MissingField` when a fetched record lacks a required statistic. A player
/// with no record for the season yields `averages: None`.
pub async fn fetch_player_averages(
    client: &BdlClient,
    name: &str,
    season: Season,
    refresh: bool,
) -> Result<Vec<PlayerAverages>> {
    let players = client.search_players(name).await?;
    if players.is_empty() {
        return Err(BdlError::PlayerNotFound {
            name: name.to_string(),
        });
    }

    let mut results = Vec::with_capacity(players.len());
    for player in players {
        let record = load_or_fetch_season_averages(client, player.id, season, refresh).await?;
        let averages = match &record {
            Some(record) => Some(BasicStats::from_record(record)?),
            None => None,
        };
        results.push(PlayerAverages {
            player,
            season,
            averages,
        });
    }

    Ok(results)
}

/// Header line for one player: name, position, team.
pub fn player_headline(player: &Player) -> String {
    if player.position.is_empty() {
        format!("{} - {}", player.full_name(), player.team.full_name)
    } else {
        format!(
            "{} ({}) - {}",
            player.full_name(),
            player.position,
            player.team.full_name
        )
    }
}

/// One-line per-game summary of a season-average record.
pub fn format_averages_line(basic: &BasicStats) -> String {
    format!(
        "GP {} | MIN {:.1} | PTS {:.1} | REB {:.1} | AST {:.1} | STL {:.1} | BLK {:.1} | TO {:.1}",
        basic.games_played,
        basic.min,
        basic.pts,
        basic.reb,
        basic.ast,
        basic.stl,
        basic.blk,
        basic.turnover,
    )
}

/// One-line shooting-percentage summary.
pub fn format_shooting_line(basic: &BasicStats) -> String {
    format!(
        "FG% {:.1} | 3P% {:.1} | FT% {:.1}",
        basic.fg_pct * 100.0,
        basic.fg3_pct * 100.0,
        basic.ft_pct * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdl::types::Team;
    use crate::cli::types::PlayerId;

    fn test_player(position: &str) -> Player {
        Player {
            id: PlayerId::new(237),
            first_name: "LeBron".to_string(),
            last_name: "James".to_string(),
            position: position.to_string(),
            team: Team {
                id: 14,
                full_name: "Los Angeles Lakers".to_string(),
                abbreviation: Some("LAL".to_string()),
            },
        }
    }

    // Env var manipulation lives in a single test to keep `cargo test`'s
    // parallel threads from racing on process state.
    #[test]
    fn test_resolve_api_key_sources() {
        std::env::set_var(API_KEY_ENV_VAR, "env-key");

        // CLI flag wins over the env var
        let key = resolve_api_key(Some("flag-key".to_string())).unwrap();
        assert_eq!(key, "flag-key");

        // Env var is the fallback
        let key = resolve_api_key(None).unwrap();
        assert_eq!(key, "env-key");

        // Neither present is an error naming the env var
        std::env::remove_var(API_KEY_ENV_VAR);
        let result = resolve_api_key(None);
        assert!(matches!(result, Err(BdlError::MissingApiKey { .. })));
    }

    #[test]
    fn test_player_headline_with_position() {
        let line = player_headline(&test_player("F"));
        assert_eq!(line, "LeBron James (F) - Los Angeles Lakers");
    }

    #[test]
    fn test_player_headline_without_position() {
        let line = player_headline(&test_player(""));
        assert_eq!(line, "LeBron James - Los Angeles Lakers");
    }

    #[test]
    fn test_format_averages_line() {
        let basic = BasicStats {
            games_played: 71,
            min: 35.3,
            pts: 25.7,
            reb: 7.3,
            ast: 8.3,
            stl: 1.3,
            blk: 0.5,
            turnover: 3.5,
            fga: 17.6,
            fta: 5.1,
            fg_pct: 0.54,
            fg3_pct: 0.41,
            ft_pct: 0.75,
        };

        let line = format_averages_line(&basic);
        assert!(line.contains("GP 71"));
        assert!(line.contains("PTS 25.7"));
        assert!(line.contains("TO 3.5"));

        let shooting = format_shooting_line(&basic);
        assert!(shooting.contains("FG% 54.0"));
        assert!(shooting.contains("3P% 41.0"));
        assert!(shooting.contains("FT% 75.0"));
    }
}
