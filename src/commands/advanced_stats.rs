//! Advanced metrics derivation and display.
//!
//! Resolves a player name, fetches the season averages, and derives the four
//! advanced metrics (True Shooting %, estimated Usage Rate, Assist/Turnover
//! Ratio, Points per Shot Attempt) for each matching player.

use serde::Serialize;

use crate::{
    bdl::{
        compute::{compute_advanced_stats, AdvancedStats},
        types::{BasicStats, Player},
    },
    cli::types::Season,
    commands::common::{
        build_client, fetch_player_averages, format_averages_line, format_shooting_line,
        player_headline, AveragesParams,
    },
    Result,
};

/// Full per-player report: identity, basic averages, derived metrics.
#[derive(Debug, Serialize)]
pub struct AdvancedReport {
    pub player: Player,
    pub season: Season,
    pub averages: Option<BasicStats>,
    pub advanced: Option<AdvancedStats>,
}

/// Resolve a player name and print basic plus advanced statistics for each
/// match.
pub async fn handle_advanced_stats(params: AveragesParams) -> Result<()> {
    let client = build_client(params.api_key)?;

    if !params.as_json {
        println!(
            "Fetching advanced stats for '{}' (season {})...",
            params.name, params.season
        );
    }

    let results =
        fetch_player_averages(&client, &params.name, params.season, params.refresh).await?;

    let reports: Vec<AdvancedReport> = results
        .into_iter()
        .map(|entry| {
            let advanced = entry.averages.as_ref().map(compute_advanced_stats);
            AdvancedReport {
                player: entry.player,
                season: entry.season,
                averages: entry.averages,
                advanced,
            }
        })
        .collect();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in reports {
        println!();
        println!("{}", player_headline(&report.player));
        match (&report.averages, &report.advanced) {
            (Some(basic), Some(advanced)) => {
                println!("  {}", format_averages_line(basic));
                println!("  {}", format_shooting_line(basic));
                println!("  True Shooting %:   {:.2}", advanced.true_shooting_pct);
                println!("  Usage Rate (est):  {:.2}", advanced.usage_rate);
                println!("  Assist/Turnover:   {:.2}", advanced.assist_to_turnover);
                println!("  Points per Shot:   {:.2}", advanced.points_per_shot);
            }
            _ => {
                println!("  No statistics found for season {}", report.season);
            }
        }
    }

    Ok(())
}
