//! Integration tests for wire types and the averages-to-metrics pipeline,
//! exercised through the public crate API.

use bdl_stats::{compute_advanced_stats, BasicStats, BdlError, Player};
use serde_json::json;

#[derive(serde::Deserialize)]
struct Envelope {
    data: Vec<serde_json::Value>,
}

fn season_averages_payload() -> serde_json::Value {
    // Shape of GET /season_averages?player_ids[]=237&season=2024
    json!({
        "data": [
            {
                "player_id": 237,
                "season": 2024,
                "games_played": 71,
                "min": 35.3,
                "pts": 25.7,
                "reb": 7.3,
                "ast": 8.3,
                "stl": 1.3,
                "blk": 0.5,
                "turnover": 3.5,
                "fga": 17.6,
                "fta": 5.1,
                "fg_pct": 0.54,
                "fg3_pct": 0.41,
                "ft_pct": 0.75
            }
        ]
    })
}

#[test]
fn test_players_search_payload_deserializes() {
    // Shape of GET /players?search=davis
    let payload = json!({
        "data": [
            {
                "id": 115,
                "first_name": "Anthony",
                "last_name": "Davis",
                "position": "F-C",
                "team": {
                    "id": 14,
                    "abbreviation": "LAL",
                    "full_name": "Los Angeles Lakers"
                }
            },
            {
                "id": 116,
                "first_name": "Deyonta",
                "last_name": "Davis",
                "position": "",
                "team": {
                    "id": 2,
                    "full_name": "Atlanta Hawks"
                }
            }
        ],
        "meta": { "total_pages": 1, "current_page": 1, "per_page": 25 }
    });

    #[derive(serde::Deserialize)]
    struct PlayerEnvelope {
        data: Vec<Player>,
    }

    let envelope: PlayerEnvelope = serde_json::from_value(payload).unwrap();
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[0].full_name(), "Anthony Davis");
    assert_eq!(envelope.data[0].position, "F-C");
    assert_eq!(envelope.data[1].position, "");
    assert_eq!(envelope.data[1].team.abbreviation, None);
}

#[test]
fn test_record_to_advanced_stats_pipeline() {
    let payload = season_averages_payload();
    let envelope: Envelope = serde_json::from_value(payload).unwrap();
    let record = &envelope.data[0];

    let basic = BasicStats::from_record(record).unwrap();
    let advanced = compute_advanced_stats(&basic);

    // 25.7 / (2 * (17.6 + 0.44 * 5.1)) * 100
    let expected_ts = 25.7 / (2.0 * (17.6 + 0.44 * 5.1)) * 100.0;
    assert_eq!(advanced.true_shooting_pct, expected_ts);

    // (17.6 + 0.44 * 5.1 + 3.5) / 35.3 * 100
    let expected_usage = (17.6 + 0.44 * 5.1 + 3.5) / 35.3 * 100.0;
    assert_eq!(advanced.usage_rate, expected_usage);

    assert_eq!(advanced.assist_to_turnover, 8.3 / 3.5);
    assert_eq!(advanced.points_per_shot, 25.7 / 17.6);
}

#[test]
fn test_incomplete_record_yields_no_advanced_stats() {
    let mut payload = season_averages_payload();
    payload["data"][0].as_object_mut().unwrap().remove("min");

    let envelope: Envelope = serde_json::from_value(payload).unwrap();
    let result = BasicStats::from_record(&envelope.data[0]);

    match result {
        Err(BdlError::MissingField { field }) => assert_eq!(field, "min"),
        other => panic!("Expected MissingField error, got {:?}", other),
    }
}

#[test]
fn test_empty_averages_payload() {
    // A player with no stats for the season returns an empty data array.
    let payload = json!({ "data": [] });
    let envelope: Envelope = serde_json::from_value(payload).unwrap();
    assert!(envelope.data.is_empty());
}
