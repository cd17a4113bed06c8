//! Entry point: parse CLI and dispatch to command handlers.

use bdl_stats::{
    cli::{Bdl, Commands, GetCmd},
    commands::{
        advanced_stats::handle_advanced_stats, players::handle_players,
        season_averages::handle_season_averages, AveragesParams,
    },
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Bdl::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Players {
                api_key,
                name,
                json,
            } => handle_players(api_key, name, json).await?,

            GetCmd::SeasonAverages {
                common,
                json,
                refresh,
            } => {
                handle_season_averages(AveragesParams {
                    api_key: common.api_key,
                    name: common.name,
                    season: common.season,
                    refresh,
                    as_json: json,
                })
                .await?
            }

            GetCmd::AdvancedStats {
                common,
                json,
                refresh,
            } => {
                handle_advanced_stats(AveragesParams {
                    api_key: common.api_key,
                    name: common.name,
                    season: common.season,
                    refresh,
                    as_json: json,
                })
                .await?
            }
        },
    }

    Ok(())
}
