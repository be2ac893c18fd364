mod card;
mod difficulty;
mod game_view;
mod match_result;
mod score_record;
mod timer_state;

pub use card::Card;
pub use difficulty::Difficulty;
pub use game_view::GameView;
pub use match_result::MatchResult;
pub use score_record::ScoreRecord;
pub use timer_state::TimerState;
