//! Tournament web app: library with models, standings/bracket logic and stores.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    bowl_bracket_view, compute_standings, cup_bracket_view, generate_bowl_bracket,
    generate_cup_bracket, resolve_placeholders, BracketMatch, BracketRound, BracketView,
    FullSchedule, TournamentEngine,
};
pub use models::{
    Fixture, GroupId, KnockoutTiming, MatchId, Outcome, Participant, Score, ScoreBook, Side,
    Standings, StandingsRow, Team, TeamStanding, TournamentConfig, TournamentError,
};
pub use store::{
    CsvScheduleStore, CsvScoreStore, MemoryScheduleStore, MemoryScoreStore, ScheduleStore,
    ScoreStore,
};
