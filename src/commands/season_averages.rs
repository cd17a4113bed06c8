//! Season averages retrieval and display.

use crate::{
    commands::common::{
        build_client, fetch_player_averages, format_averages_line, format_shooting_line,
        player_headline, AveragesParams,
    },
    Result,
};

/// Resolve a player name and print per-game season averages for each match.
pub async fn handle_season_averages(params: AveragesParams) -> Result<()> {
    let client = build_client(params.api_key)?;

    if !params.as_json {
        println!(
            "Fetching season averages for '{}' (season {})...",
            params.name, params.season
        );
    }

    let results =
        fetch_player_averages(&client, &params.name, params.season, params.refresh).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for entry in results {
        println!();
        println!("{}", player_headline(&entry.player));
        match entry.averages {
            Some(basic) => {
                println!("  {}", format_averages_line(&basic));
                println!("  {}", format_shooting_line(&basic));
            }
            None => {
                println!("  No statistics found for season {}", entry.season);
            }
        }
    }

    Ok(())
}
