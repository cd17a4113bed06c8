use serde::Serialize;

use crate::bdl::types::BasicStats;


/// Metrics derived from one season-average record.
///
/// Produced only by [`compute_advanced_stats`]; a value object with no
/// lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvancedStats {
    /// True Shooting %, on a 0-100 scale.
    pub true_shooting_pct: f64,
    /// Estimated usage rate. A per-minute approximation, not the official
    /// NBA formula (team possession data is unavailable here).
    pub usage_rate: f64,
    pub assist_to_turnover: f64,
    pub points_per_shot: f64,
}

/// Derive advanced metrics from a validated season-average record.
///
/// Pure and stateless: no I/O, no retained state, safe to call concurrently.
/// Denominator guards follow the conventions below rather than erroring:
///
/// - True Shooting % is `0` unless both `fga` and `fta` are positive, since
///   its denominator is a weighted sum of the two attempt types.
/// - Usage rate is `0` for zero minutes; points per shot is `0` for zero
///   attempts.
/// - With zero turnovers the assist/turnover ratio falls back to the raw
///   assist count, not `0`.
pub fn compute_advanced_stats(basic: &BasicStats) -> AdvancedStats {
    let true_shooting_pct = if basic.fga > 0.0 && basic.fta > 0.0 {
        basic.pts / (2.0 * (basic.fga + 0.44 * basic.fta)) * 100.0
    } else {
        0.0
    };

    let usage_rate = if basic.min > 0.0 {
        (basic.fga + 0.44 * basic.fta + basic.turnover) / basic.min * 100.0
    } else {
        0.0
    };

    let assist_to_turnover = if basic.turnover > 0.0 {
        basic.ast / basic.turnover
    } else {
        basic.ast
    };

    let points_per_shot = if basic.fga > 0.0 {
        basic.pts / basic.fga
    } else {
        0.0
    };

    AdvancedStats {
        true_shooting_pct,
        usage_rate,
        assist_to_turnover,
        points_per_shot,
    }
}
