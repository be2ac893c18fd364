use std::time::SystemTime;

use itertools::Itertools;
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::{Card, Difficulty, GameView, MatchResult, TimerState};

/// Symbols a deck draws its pairs from; a game uses the first `pair_count`.
pub const CARD_SYMBOLS: [char; 16] = [
    '🍎', '🍌', '🍓', '🍕', '🍦', '🍩', '🍔', '🌮', '🚀', '🚗', '🎮', '🎸', '🎯', '⚽', '🎨',
    '🎭',
];

pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A single memory-match playthrough. The serde form is the session
/// snapshot: callers own persistence and hand the value back for each
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub cards: Vec<Card>,
    pub timer_state: TimerState,
    pub attempts: u32,
    pub matched_pairs: usize,
    pub is_completed: bool,
    pub seed: u64,
}

impl GameState {
    pub fn new(difficulty: Difficulty, player_name: &str) -> Self {
        Self::with_seed(difficulty, player_name, None)
    }

    pub fn with_seed(difficulty: Difficulty, player_name: &str, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut cards: Vec<Card> = CARD_SYMBOLS
            .iter()
            .take(difficulty.pair_count())
            .enumerate()
            .flat_map(|(pair, &value)| {
                [Card::new(pair * 2, value), Card::new(pair * 2 + 1, value)]
            })
            .collect();
        cards.shuffle(&mut rng);
        trace!(target: "game_state", "Dealt {} cards with seed {}", cards.len(), seed);

        Self {
            player_name: player_name.to_string(),
            difficulty,
            cards,
            timer_state: TimerState::default(),
            attempts: 0,
            matched_pairs: 0,
            is_completed: false,
            seed,
        }
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Toggle the card with the given id. Returns false, without touching
    /// anything, when the id is unknown or the card is already matched.
    ///
    /// The engine does not police how many cards are face up; the caller
    /// must resolve via [`GameState::check_match`] once two are showing.
    pub fn flip_card(&mut self, card_id: usize) -> bool {
        match self.cards.iter_mut().find(|card| card.id == card_id) {
            Some(card) if !card.is_matched => {
                card.flip();
                true
            }
            _ => false,
        }
    }

    /// Compare the face-up cards. Counts an attempt only when exactly two
    /// unmatched cards are showing; any other count leaves the state
    /// untouched.
    pub fn check_match(&mut self) -> MatchResult {
        let face_up: Option<(usize, usize)> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_flipped && !card.is_matched)
            .map(|(index, _)| index)
            .collect_tuple();

        let Some((first, second)) = face_up else {
            return MatchResult::NotReady;
        };

        self.attempts += 1;
        if self.cards[first].value != self.cards[second].value {
            return MatchResult::NoMatch;
        }

        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.matched_pairs += 1;
        trace!(
            target: "game_state",
            "Matched pair {}/{}",
            self.matched_pairs,
            self.total_pairs()
        );

        if self.matched_pairs == self.total_pairs() {
            self.timer_state = self.timer_state.ended(SystemTime::now());
            self.is_completed = true;
        }
        MatchResult::Match
    }

    /// Turn every face-up unmatched card back down. Idempotent.
    pub fn reset_unmatched(&mut self) {
        for card in self
            .cards
            .iter_mut()
            .filter(|card| card.is_flipped && !card.is_matched)
        {
            card.flip();
        }
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer_state.elapsed_seconds()
    }

    pub fn formatted_time(&self) -> String {
        self.timer_state.formatted()
    }

    /// 0 until the game completes. A completed game scores its difficulty's
    /// base, discounted up to 70% for time (capped at 5 minutes) and up to
    /// 50% for comparisons beyond the minimum of one per pair, never below 1.
    pub fn score(&self) -> u32 {
        if !self.is_completed {
            return 0;
        }

        let duration = self.elapsed_seconds();
        let time_factor = 1.0 - (duration as f64 / 300.0).min(0.7);
        let extra_attempts = self.attempts.saturating_sub(self.matched_pairs as u32);
        let attempt_factor = 1.0 - (extra_attempts as f64 / 30.0).min(0.5);

        let score = (self.difficulty.base_score() as f64 * time_factor * attempt_factor) as u32;
        score.max(1)
    }

    pub fn view(&self) -> GameView {
        GameView {
            player_name: self.player_name.clone(),
            difficulty: self.difficulty,
            time: self.formatted_time(),
            attempts: self.attempts,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            is_completed: self.is_completed,
            score: self.score(),
            cards: self.cards.clone(),
        }
    }
}
