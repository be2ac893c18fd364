use serde::{Deserialize, Serialize};

/// One row of the persisted leaderboard. Field names match the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    /// Game duration in whole seconds.
    pub time: u64,
    pub attempts: u32,
    /// Local timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
}
