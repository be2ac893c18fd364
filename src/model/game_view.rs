use serde::Serialize;

use crate::model::{Card, Difficulty};

/// Read-only projection of a game for the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub time: String,
    pub attempts: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub is_completed: bool,
    pub score: u32,
    pub cards: Vec<Card>,
}
