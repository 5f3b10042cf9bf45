//! CSV-backed stores: `group_schedule.csv` (match,teams,group,start_time,end_time) and
//! `scores.csv` (match,score). Missing files are created with just their header.

use crate::models::{Fixture, MatchId, ScoreBook, TournamentError};
use crate::store::{ScheduleStore, ScoreStore};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SCHEDULE_HEADER: [&str; 5] = ["match", "teams", "group", "start_time", "end_time"];
const SCORES_HEADER: [&str; 2] = ["match", "score"];

#[derive(Debug, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "match")]
    match_id: MatchId,
    teams: String,
    group: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl ScheduleRow {
    fn into_fixture(self) -> Result<Fixture, TournamentError> {
        let (home, away) =
            Fixture::parse_teams(&self.teams).ok_or_else(|| TournamentError::MalformedFixture {
                match_id: self.match_id,
                reason: format!("teams {:?} is not \"<team> vs <team>\"", self.teams),
            })?;
        Ok(Fixture::new(
            self.match_id,
            home,
            away,
            self.group,
            self.start_time,
            self.end_time,
        ))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct ScoreRow {
    #[serde(rename = "match")]
    match_id: MatchId,
    score: Option<String>,
}

/// Create `path` containing only `header` if it does not exist yet.
fn ensure_file(path: &Path, header: &[&str]) -> Result<bool, TournamentError> {
    if path.exists() {
        return Ok(false);
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    writer.flush()?;
    log::info!("Created empty {}", path.display());
    Ok(true)
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>, TournamentError> {
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?)
}

/// Group fixtures read from a CSV file on every load.
#[derive(Clone, Debug)]
pub struct CsvScheduleStore {
    path: PathBuf,
}

impl CsvScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleStore for CsvScheduleStore {
    fn load_group_fixtures(&self) -> Result<Vec<Fixture>, TournamentError> {
        if ensure_file(&self.path, &SCHEDULE_HEADER)? {
            return Ok(Vec::new());
        }
        let mut fixtures = Vec::new();
        for row in reader(&self.path)?.deserialize::<ScheduleRow>() {
            fixtures.push(row?.into_fixture()?);
        }
        Ok(fixtures)
    }
}

/// Scores kept in a CSV file; every update rewrites the file.
#[derive(Clone, Debug)]
pub struct CsvScoreStore {
    path: PathBuf,
}

impl CsvScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<ScoreRow>, TournamentError> {
        if ensure_file(&self.path, &SCORES_HEADER)? {
            return Ok(Vec::new());
        }
        let mut rows = Vec::new();
        for row in reader(&self.path)?.deserialize::<ScoreRow>() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl ScoreStore for CsvScoreStore {
    fn load_scores(&self) -> Result<ScoreBook, TournamentError> {
        let rows = self.read_rows()?;
        let mut book = ScoreBook::new();
        for row in rows {
            if let Some(score) = row.score {
                book.upsert(row.match_id, score);
            }
        }
        Ok(book)
    }

    fn update_score(&mut self, match_id: MatchId, score: &str) -> Result<(), TournamentError> {
        let mut rows = self.read_rows()?;
        match rows.iter_mut().find(|r| r.match_id == match_id) {
            Some(row) => row.score = Some(score.to_string()),
            None => rows.push(ScoreRow {
                match_id,
                score: Some(score.to_string()),
            }),
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(SCORES_HEADER)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("Score for match {} set to {:?}", match_id, score);
        Ok(())
    }
}
