//! Tournament business logic: standings, knockout brackets, placeholder resolution, schedule.

mod bracket;
mod resolve;
mod schedule;
mod standings;
mod views;

pub use bracket::{
    generate_bowl_bracket, generate_cup_bracket, BOWL_FINAL, BOWL_SEMIFINALS, BOWL_THIRD_PLACE,
    CUP_FINAL, CUP_THIRD_PLACE, QUARTERFINALS, SEMIFINALS,
};
pub use resolve::resolve_placeholders;
pub use schedule::{FullSchedule, TournamentEngine};
pub use standings::compute_standings;
pub use views::{
    bowl_bracket_view, cup_bracket_view, BracketMatch, BracketRound, BracketView, SCORE_TBD,
};
