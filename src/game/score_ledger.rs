use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use log::{trace, warn};

use crate::game::GameState;
use crate::model::{Difficulty, ScoreRecord};

pub const MAX_SCORES_PER_DIFFICULTY: usize = 10;

/// Ranked, bounded score lists per difficulty, backed by a single JSON file
/// that is rewritten in full on every accepted score. Construct one at
/// process start and share it by reference; the interior lock makes the
/// read-modify-persist sequence safe when several games finish at once.
#[derive(Debug)]
pub struct HighScoreLedger {
    file_path: PathBuf,
    scores: Mutex<HashMap<Difficulty, Vec<ScoreRecord>>>,
}

impl HighScoreLedger {
    /// Load the ledger from `file_path`. A missing or unreadable file is
    /// treated as "no scores yet", never an error.
    pub fn load(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        if let Some(dir) = file_path.parent() {
            let _ = fs::create_dir_all(dir);
        }

        let scores = Self::read_scores(&file_path);
        Self {
            file_path,
            scores: Mutex::new(scores),
        }
    }

    fn read_scores(path: &Path) -> HashMap<Difficulty, Vec<ScoreRecord>> {
        let mut scores: HashMap<Difficulty, Vec<ScoreRecord>> = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(
                    target: "score_ledger",
                    "Discarding unreadable high score file {}: {}",
                    path.display(),
                    err
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        for difficulty in Difficulty::all() {
            scores.entry(difficulty).or_default();
        }
        scores
    }

    fn save(&self, scores: &HashMap<Difficulty, Vec<ScoreRecord>>) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(scores)?;
        fs::write(&self.file_path, contents)
    }

    /// Record a finished game. Returns `Ok(false)`, leaving the ledger
    /// untouched, when the game is not completed; surfaces an error only
    /// when the rewritten file cannot be persisted.
    pub fn add_score(&self, game: &GameState) -> io::Result<bool> {
        if !game.is_completed {
            return Ok(false);
        }

        let record = ScoreRecord {
            player_name: game.player_name.clone(),
            score: game.score(),
            time: game.elapsed_seconds(),
            attempts: game.attempts,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut scores = self.scores.lock().unwrap();
        let records = scores.entry(game.difficulty).or_default();
        records.push(record);

        // Stable sort: tied scores keep their insertion order
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(MAX_SCORES_PER_DIFFICULTY);

        self.save(&scores)?;
        trace!(
            target: "score_ledger",
            "Recorded {} points for {} on {}",
            game.score(),
            game.player_name,
            game.difficulty
        );
        Ok(true)
    }

    /// Ranked scores for one difficulty, highest first.
    pub fn get_scores(&self, difficulty: Difficulty) -> Vec<ScoreRecord> {
        self.scores
            .lock()
            .unwrap()
            .get(&difficulty)
            .cloned()
            .unwrap_or_default()
    }

    pub fn all_scores(&self) -> HashMap<Difficulty, Vec<ScoreRecord>> {
        self.scores.lock().unwrap().clone()
    }
}
