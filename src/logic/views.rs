//! Bracket views: knockout fixtures grouped by round, in display order.

use crate::logic::bracket::{
    BOWL_FINAL, BOWL_SEMIFINALS, BOWL_THIRD_PLACE, CUP_FINAL, CUP_THIRD_PLACE, QUARTERFINALS,
    SEMIFINALS,
};
use crate::models::{Fixture, MatchId, ScoreBook};
use serde::Serialize;

/// Shown in place of a score for unplayed matches.
pub const SCORE_TBD: &str = "TBD";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketMatch {
    pub match_id: MatchId,
    pub teams: String,
    pub score: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketRound {
    pub round: String,
    pub matches: Vec<BracketMatch>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketView {
    pub title: String,
    pub rounds: Vec<BracketRound>,
}

fn cup_rounds() -> Vec<&'static str> {
    let mut rounds = QUARTERFINALS.to_vec();
    rounds.extend(SEMIFINALS);
    rounds.extend([CUP_THIRD_PLACE, CUP_FINAL]);
    rounds
}

fn bowl_rounds() -> Vec<&'static str> {
    let mut rounds = BOWL_SEMIFINALS.to_vec();
    rounds.extend([BOWL_THIRD_PLACE, BOWL_FINAL]);
    rounds
}

/// One round per label that has at least one fixture, in `order`.
fn build_view(
    title: &str,
    order: &[&str],
    fixtures: &[Fixture],
    scores: &ScoreBook,
) -> BracketView {
    let rounds = order
        .iter()
        .filter_map(|&label| {
            let matches: Vec<BracketMatch> = fixtures
                .iter()
                .filter(|f| f.round == label)
                .map(|f| BracketMatch {
                    match_id: f.match_id,
                    teams: f.teams(),
                    score: scores.raw(f.match_id).unwrap_or(SCORE_TBD).to_string(),
                })
                .collect();
            (!matches.is_empty()).then(|| BracketRound {
                round: label.to_string(),
                matches,
            })
        })
        .collect();
    BracketView {
        title: title.to_string(),
        rounds,
    }
}

pub fn cup_bracket_view(fixtures: &[Fixture], scores: &ScoreBook) -> BracketView {
    build_view("Cup Knockout Bracket", &cup_rounds(), fixtures, scores)
}

pub fn bowl_bracket_view(fixtures: &[Fixture], scores: &ScoreBook) -> BracketView {
    build_view("Bowl Knockout Bracket", &bowl_rounds(), fixtures, scores)
}
