//! TournamentConfig (roster + knockout timing) and TournamentError.

use crate::models::fixture::MatchId;
use crate::models::team::{GroupId, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

/// Errors that can occur while loading or deriving the schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A group does not have enough ranked teams to seed a bracket.
    InsufficientStandings {
        group: GroupId,
        needed: usize,
        found: usize,
    },
    /// A schedule row could not be turned into a fixture.
    MalformedFixture { match_id: MatchId, reason: String },
    /// No fixture (group or knockout) carries this match id.
    UnknownMatch(MatchId),
    /// Score input is not of the form "<int>-<int>".
    InvalidScore(String),
    /// Roster or timing settings are inconsistent.
    InvalidConfig(String),
    /// Reading or writing a store file failed.
    Io(String),
    /// A store file is not valid CSV for its columns.
    Csv(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientStandings { group, needed, found } => write!(
                f,
                "Group {} needs at least {} ranked teams to seed the bracket (found {})",
                group, needed, found
            ),
            TournamentError::MalformedFixture { match_id, reason } => {
                write!(f, "Fixture {} is malformed: {}", match_id, reason)
            }
            TournamentError::UnknownMatch(id) => write!(f, "Match {} not found", id),
            TournamentError::InvalidScore(s) => {
                write!(f, "Score {:?} must look like 2-1", s)
            }
            TournamentError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            TournamentError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            TournamentError::Csv(msg) => write!(f, "Store CSV error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<std::io::Error> for TournamentError {
    fn from(e: std::io::Error) -> Self {
        TournamentError::Io(e.to_string())
    }
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for TournamentError {
    fn from(e: serde_json::Error) -> Self {
        TournamentError::InvalidConfig(e.to_string())
    }
}

/// Number of fixtures each generated bracket contains.
pub const CUP_FIXTURES: u32 = 8;
pub const BOWL_FIXTURES: u32 = 4;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Match ids and slot lengths of the generated knockout stages (minutes).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockoutTiming {
    pub cup_first_match_id: MatchId,
    pub bowl_first_match_id: MatchId,
    /// Minutes after the last group match that the Cup starts.
    pub cup_start_offset: i64,
    /// Minutes after the last group match that the Bowl starts.
    pub bowl_start_offset: i64,
    pub match_minutes: i64,
    pub final_minutes: i64,
    pub gap_minutes: i64,
}

impl Default for KnockoutTiming {
    fn default() -> Self {
        Self {
            cup_first_match_id: 13,
            bowl_first_match_id: 25,
            cup_start_offset: 3,
            bowl_start_offset: 5,
            match_minutes: 12,
            final_minutes: 17,
            gap_minutes: 3,
        }
    }
}

fn id_range(first: MatchId, count: u32, stage: &str) -> Result<Range<MatchId>, TournamentError> {
    let end = first.checked_add(count).ok_or_else(|| {
        TournamentError::InvalidConfig(format!(
            "{} match ids starting at {} do not fit in a match id",
            stage, first
        ))
    })?;
    Ok(first..end)
}

impl KnockoutTiming {
    /// Ids the Cup fixtures take; an error if they run past `MatchId::MAX`.
    pub fn cup_match_ids(&self) -> Result<Range<MatchId>, TournamentError> {
        id_range(self.cup_first_match_id, CUP_FIXTURES, "cup")
    }

    /// Ids the Bowl fixtures take; an error if they run past `MatchId::MAX`.
    pub fn bowl_match_ids(&self) -> Result<Range<MatchId>, TournamentError> {
        id_range(self.bowl_first_match_id, BOWL_FIXTURES, "bowl")
    }

    /// Every offset and slot length must lie within one day (0..=1440 minutes).
    pub fn check_minutes(&self) -> Result<(), TournamentError> {
        let fields = [
            ("cup_start_offset", self.cup_start_offset),
            ("bowl_start_offset", self.bowl_start_offset),
            ("match_minutes", self.match_minutes),
            ("final_minutes", self.final_minutes),
            ("gap_minutes", self.gap_minutes),
        ];
        for (name, minutes) in fields {
            if !(0..=MINUTES_PER_DAY).contains(&minutes) {
                return Err(TournamentError::InvalidConfig(format!(
                    "{} must be between 0 and {} minutes (got {})",
                    name, MINUTES_PER_DAY, minutes
                )));
            }
        }
        Ok(())
    }

    /// Whether a knockout fixture would be generated with `match_id`.
    pub fn is_knockout_id(&self, match_id: MatchId) -> bool {
        [self.cup_match_ids(), self.bowl_match_ids()]
            .iter()
            .any(|range| matches!(range, Ok(r) if r.contains(&match_id)))
    }
}

/// Static tournament setup handed to the engine at construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub timing: KnockoutTiming,
}

impl TournamentConfig {
    /// Create a config with the given roster and default knockout timing.
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            timing: KnockoutTiming::default(),
        }
    }

    /// The 12-team RHL 2025 roster.
    pub fn rhl_2025() -> Self {
        use GroupId::*;
        let roster = [
            ("Royal Lions", A, "A1"),
            ("Royal Tuskers", A, "A2"),
            ("Royal Panthers", A, "A3"),
            ("Royal Sharks", B, "B1"),
            ("Royal Tigers", B, "B2"),
            ("Royal Leopards", B, "B3"),
            ("Royal Cheetahs", C, "C1"),
            ("Royal Bulls", C, "C2"),
            ("Royal Zebras", C, "C3"),
            ("Royal Eagles", D, "D1"),
            ("Royal Rhinos", D, "D2"),
            ("Royal Wolves", D, "D3"),
        ];
        Self::new(
            roster
                .into_iter()
                .map(|(name, group, code)| Team::new(name, group, code))
                .collect(),
        )
    }

    /// Load a roster (and optional timing) from a JSON file, then validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: TournamentConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Team codes must be unique, knockout slot lengths must lie within a day, and the Cup
    /// and Bowl id ranges must fit in a match id without overlapping.
    pub fn validate(&self) -> Result<(), TournamentError> {
        let mut seen = HashSet::new();
        for team in &self.teams {
            if team.code.trim().is_empty() {
                return Err(TournamentError::InvalidConfig(format!(
                    "team {:?} has an empty code",
                    team.name
                )));
            }
            if !seen.insert(team.code.as_str()) {
                return Err(TournamentError::InvalidConfig(format!(
                    "duplicate team code {}",
                    team.code
                )));
            }
        }
        self.timing.check_minutes()?;
        let cup = self.timing.cup_match_ids()?;
        let bowl = self.timing.bowl_match_ids()?;
        if cup.start < bowl.end && bowl.start < cup.end {
            return Err(TournamentError::InvalidConfig(format!(
                "cup match ids {:?} overlap bowl match ids {:?}",
                cup, bowl
            )));
        }
        Ok(())
    }

    /// Teams assigned to `group`, in roster order.
    pub fn teams_in(&self, group: GroupId) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(move |t| t.group == group)
    }

    pub fn team_by_code(&self, code: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.code == code)
    }

    /// Display name for a code; the code itself if it is not on the roster.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.team_by_code(code).map(|t| t.name.as_str()).unwrap_or(code)
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::rhl_2025()
    }
}
