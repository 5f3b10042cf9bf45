//! Data structures for the tournament: teams, fixtures, scores, standings, configuration.

mod fixture;
mod score;
mod standings;
mod team;
mod tournament;

pub use fixture::{Fixture, MatchId, Outcome, Participant, Side, VERSUS};
pub use score::{MalformedScore, Score, ScoreBook};
pub use standings::{Standings, StandingsRow, TeamStanding};
pub use team::{GroupId, Team};
pub use tournament::{
    KnockoutTiming, TournamentConfig, TournamentError, BOWL_FIXTURES, CUP_FIXTURES,
};
