//! ID types for balldontlie players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for balldontlie player IDs.
///
/// Ensures player IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing up player IDs with other
/// numeric values.
///
/// # Examples
///
/// ```rust
/// use bdl_stats::PlayerId;
///
/// let player_id = PlayerId::new(237);
/// assert_eq!(player_id.as_u64(), 237);
/// assert_eq!(player_id.to_string(), "237");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new PlayerId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
