//! Score parsing ("2-1") and the per-match score book.

use crate::models::fixture::{MatchId, Side};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A parsed "<home>-<away>" result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// The side with more goals; None on a draw.
    pub fn winning_side(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            Ordering::Greater => Some(Side::Home),
            Ordering::Less => Some(Side::Away),
            Ordering::Equal => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

/// The text is not "<int>-<int>".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MalformedScore(pub String);

impl fmt::Display for MalformedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score {:?} is not of the form <int>-<int>", self.0)
    }
}

impl FromStr for Score {
    type Err = MalformedScore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedScore(s.to_string());
        let (home, away) = s.split_once('-').ok_or_else(malformed)?;
        // Goal counts fit in a u16; larger values read as malformed.
        let home: u16 = home.trim().parse().map_err(|_| malformed())?;
        let away: u16 = away.trim().parse().map_err(|_| malformed())?;
        Ok(Score {
            home: home.into(),
            away: away.into(),
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Raw score strings by match id, as held by the score store. At most one entry per
/// match; blank values are never stored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBook {
    entries: BTreeMap<MatchId, String>,
}

impl ScoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the score for a match. A blank value removes nothing and is ignored.
    pub fn upsert(&mut self, match_id: MatchId, score: impl Into<String>) {
        let score = score.into();
        let trimmed = score.trim();
        if trimmed.is_empty() {
            return;
        }
        self.entries.insert(match_id, trimmed.to_string());
    }

    /// The raw value, possibly malformed.
    pub fn raw(&self, match_id: MatchId) -> Option<&str> {
        self.entries.get(&match_id).map(String::as_str)
    }

    pub fn has_score(&self, match_id: MatchId) -> bool {
        self.entries.contains_key(&match_id)
    }

    /// The parsed value; malformed entries read as absent.
    pub fn parsed(&self, match_id: MatchId) -> Option<Score> {
        self.raw(match_id)?.parse().ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MatchId, &str)> {
        self.entries.iter().map(|(id, s)| (*id, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(MatchId, String)> for ScoreBook {
    fn from_iter<I: IntoIterator<Item = (MatchId, String)>>(iter: I) -> Self {
        let mut book = ScoreBook::new();
        for (id, score) in iter {
            book.upsert(id, score);
        }
        book
    }
}
