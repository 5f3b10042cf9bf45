//! Fixture, Participant and the "Winner/Loser <round>" placeholder grammar.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a match, shared by the schedule and the score store.
pub type MatchId = u32;

/// Separator between the two participants in the "teams" text.
pub const VERSUS: &str = " vs ";

/// Which slot of a fixture.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Home,
    Away,
}

/// What a placeholder asks for from the referenced fixture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner,
    Loser,
}

impl Outcome {
    fn keyword(self) -> &'static str {
        match self {
            Outcome::Winner => "Winner",
            Outcome::Loser => "Loser",
        }
    }
}

/// Who plays in a fixture slot: a concrete team (code or display name) or a reference
/// to the winner/loser of another round.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Participant {
    Team { name: String },
    Placeholder { outcome: Outcome, round: String },
}

impl Participant {
    pub fn team(name: impl Into<String>) -> Self {
        Participant::Team { name: name.into() }
    }

    pub fn winner_of(round: impl Into<String>) -> Self {
        Participant::Placeholder {
            outcome: Outcome::Winner,
            round: round.into(),
        }
    }

    pub fn loser_of(round: impl Into<String>) -> Self {
        Participant::Placeholder {
            outcome: Outcome::Loser,
            round: round.into(),
        }
    }

    /// Parse one side of a "teams" string. "Winner X" / "Loser X" become placeholders
    /// (with QF1..SF2 shorthands expanded), anything else is a team reference.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        for outcome in [Outcome::Winner, Outcome::Loser] {
            if let Some(rest) = text.strip_prefix(outcome.keyword()) {
                if let Some(round) = rest.strip_prefix(' ') {
                    let round = round.trim();
                    if !round.is_empty() {
                        return Participant::Placeholder {
                            outcome,
                            round: expand_round_shorthand(round).to_string(),
                        };
                    }
                }
            }
        }
        Participant::team(text)
    }

    pub fn team_name(&self) -> Option<&str> {
        match self {
            Participant::Team { name } => Some(name),
            Participant::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Participant::Placeholder { .. })
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Team { name } => f.write_str(name),
            Participant::Placeholder { outcome, round } => {
                write!(f, "{} {}", outcome.keyword(), round)
            }
        }
    }
}

/// Schedule sheets sometimes use "QF1" / "SF2" for knockout rounds.
fn expand_round_shorthand(round: &str) -> &str {
    match round {
        "QF1" => "Quarterfinal 1",
        "QF2" => "Quarterfinal 2",
        "QF3" => "Quarterfinal 3",
        "QF4" => "Quarterfinal 4",
        "SF1" => "Semifinal 1",
        "SF2" => "Semifinal 2",
        other => other,
    }
}

/// A scheduled match. `round` is the group ("A") for group fixtures or the knockout
/// round label ("Quarterfinal 1", "Bowl Final") for generated ones.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_id: MatchId,
    pub home: Participant,
    pub away: Participant,
    pub round: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Fixture {
    pub fn new(
        match_id: MatchId,
        home: Participant,
        away: Participant,
        round: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            match_id,
            home,
            away,
            round: round.into(),
            start,
            end,
        }
    }

    /// Split "<home> vs <away>" into participants. None if the separator is missing.
    pub fn parse_teams(teams: &str) -> Option<(Participant, Participant)> {
        let (home, away) = teams.split_once(VERSUS)?;
        Some((Participant::parse(home), Participant::parse(away)))
    }

    /// The "<home> vs <away>" text.
    pub fn teams(&self) -> String {
        format!("{}{}{}", self.home, VERSUS, self.away)
    }

    pub fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn participant_mut(&mut self, side: Side) -> &mut Participant {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.home.is_placeholder() || self.away.is_placeholder()
    }
}
