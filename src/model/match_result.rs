use serde::{Deserialize, Serialize};

/// Outcome of comparing the face-up cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Two cards were face up and carried the same value.
    Match,
    /// Two cards were face up with different values.
    NoMatch,
    /// Fewer or more than two unmatched cards were face up.
    NotReady,
}
