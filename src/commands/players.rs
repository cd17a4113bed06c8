//! Player search command.

use crate::{commands::common::build_client, error::BdlError, Result};

/// Search for players by name and print each matching identity.
pub async fn handle_players(api_key: Option<String>, name: String, as_json: bool) -> Result<()> {
    let client = build_client(api_key)?;

    let players = client.search_players(&name).await?;
    if players.is_empty() {
        return Err(BdlError::PlayerNotFound { name });
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
    } else {
        println!("✓ Found {} players matching '{}'", players.len(), name);
        for player in players {
            let position = if player.position.is_empty() {
                "?".to_string()
            } else {
                player.position.clone()
            };
            println!(
                "{} {} ({}) - {}",
                player.id.as_u64(),
                player.full_name(),
                position,
                player.team.full_name,
            );
        }
    }

    Ok(())
}
