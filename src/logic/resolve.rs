//! Placeholder resolution: "Winner Quarterfinal 1" becomes the team that won it.

use crate::models::{Fixture, Outcome, Participant, ScoreBook, Side};

/// Replace every placeholder whose referenced round has been decided.
///
/// A placeholder resolves when exactly one fixture carries the referenced round label,
/// that fixture has a parseable, non-drawn score and the slot it points at is a team.
/// Passes repeat until nothing changes, so chains (quarterfinal → semifinal → final)
/// resolve regardless of fixture order.
pub fn resolve_placeholders(mut fixtures: Vec<Fixture>, scores: &ScoreBook) -> Vec<Fixture> {
    let mut passes = 0;
    while resolve_pass(&mut fixtures, scores) {
        passes += 1;
    }
    log::debug!("Placeholder resolution settled after {} pass(es)", passes);
    fixtures
}

/// One sweep over all slots. Returns whether any slot changed.
fn resolve_pass(fixtures: &mut [Fixture], scores: &ScoreBook) -> bool {
    let mut changed = false;
    for i in 0..fixtures.len() {
        for side in [Side::Home, Side::Away] {
            let Participant::Placeholder { outcome, round } = fixtures[i].participant(side) else {
                continue;
            };
            if let Some(team) = decided_participant(fixtures, round, *outcome, scores) {
                *fixtures[i].participant_mut(side) = team;
                changed = true;
            }
        }
    }
    changed
}

/// The winner or loser of the single fixture labelled `round`, if known.
fn decided_participant(
    fixtures: &[Fixture],
    round: &str,
    outcome: Outcome,
    scores: &ScoreBook,
) -> Option<Participant> {
    let mut labelled = fixtures.iter().filter(|f| f.round == round);
    let source = labelled.next()?;
    if labelled.next().is_some() {
        return None;
    }
    let winning = scores.parsed(source.match_id)?.winning_side()?;
    let side = match outcome {
        Outcome::Winner => winning,
        Outcome::Loser => match winning {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        },
    };
    let participant = source.participant(side);
    if participant.is_placeholder() {
        return None;
    }
    Some(participant.clone())
}
