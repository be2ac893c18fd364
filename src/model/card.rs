use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub value: char,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub fn new(id: usize, value: char) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Toggle between face up and face down.
    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    /// Resolve the card permanently. A matched card stays face up.
    pub fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }
}
