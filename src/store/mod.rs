//! External collaborators: where group fixtures and scores come from.

mod csv_files;
mod memory;

pub use csv_files::{CsvScheduleStore, CsvScoreStore};
pub use memory::{MemoryScheduleStore, MemoryScoreStore};

use crate::models::{Fixture, MatchId, ScoreBook, TournamentError};

/// Static, ordered list of group-stage fixtures.
pub trait ScheduleStore {
    fn load_group_fixtures(&self) -> Result<Vec<Fixture>, TournamentError>;
}

/// Durable match id → score string mapping with upsert semantics.
pub trait ScoreStore {
    fn load_scores(&self) -> Result<ScoreBook, TournamentError>;

    /// Insert or replace the score for `match_id`. The value is stored as given.
    fn update_score(&mut self, match_id: MatchId, score: &str) -> Result<(), TournamentError>;
}
