//! In-memory stores, for tests and embedding.

use crate::models::{Fixture, MatchId, ScoreBook, TournamentError};
use crate::store::{ScheduleStore, ScoreStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryScheduleStore {
    fixtures: Vec<Fixture>,
}

impl MemoryScheduleStore {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

impl ScheduleStore for MemoryScheduleStore {
    fn load_group_fixtures(&self) -> Result<Vec<Fixture>, TournamentError> {
        Ok(self.fixtures.clone())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    scores: ScoreBook,
}

impl MemoryScoreStore {
    pub fn new(scores: ScoreBook) -> Self {
        Self { scores }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_scores(&self) -> Result<ScoreBook, TournamentError> {
        Ok(self.scores.clone())
    }

    fn update_score(&mut self, match_id: MatchId, score: &str) -> Result<(), TournamentError> {
        self.scores.upsert(match_id, score);
        Ok(())
    }
}
