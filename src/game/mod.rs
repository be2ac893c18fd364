pub mod game_state;
pub mod score_ledger;

pub use game_state::{GameState, CARD_SYMBOLS, DEFAULT_PLAYER_NAME};
pub use score_ledger::HighScoreLedger;
