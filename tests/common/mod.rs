//! Shared builders for the integration tests.
#![allow(dead_code)]

use chrono::{Duration, NaiveTime};
use rhl_tournament_web::{Fixture, MatchId, Participant, ScoreBook};

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
}

/// Round robin for groups A-D (1v2, 1v3, 2v3 each), ids 1..=12, 12-minute slots with a
/// 3-minute gap from 09:00. The last match ends at 11:57.
pub fn group_schedule() -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    let mut id: MatchId = 1;
    let mut start = time("09:00:00");
    for group in ["A", "B", "C", "D"] {
        for (home, away) in [(1, 2), (1, 3), (2, 3)] {
            let end = start + Duration::minutes(12);
            fixtures.push(Fixture::new(
                id,
                Participant::team(format!("{group}{home}")),
                Participant::team(format!("{group}{away}")),
                group,
                start,
                end,
            ));
            id += 1;
            start = end + Duration::minutes(3);
        }
    }
    fixtures
}

/// Every group match won 1-0 by the home side: seed 1 > seed 2 > seed 3 in each group.
pub fn home_wins_everywhere() -> ScoreBook {
    (1..=12).map(|id| (id, "1-0".to_string())).collect()
}

pub fn scores(entries: &[(MatchId, &str)]) -> ScoreBook {
    entries
        .iter()
        .map(|(id, s)| (*id, s.to_string()))
        .collect()
}

pub fn by_round<'a>(fixtures: &'a [Fixture], round: &str) -> &'a Fixture {
    fixtures
        .iter()
        .find(|f| f.round == round)
        .unwrap_or_else(|| panic!("no fixture for {round}"))
}
