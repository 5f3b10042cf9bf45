//! Knockout stages: Cup (top two of each group) and Bowl (third of each group).
//! Both are regenerated from standings on every read, so they must be deterministic.

use crate::models::{
    Fixture, GroupId, MatchId, Participant, Standings, TournamentConfig, TournamentError,
};
use chrono::{Duration, NaiveTime};

pub const QUARTERFINALS: [&str; 4] = [
    "Quarterfinal 1",
    "Quarterfinal 2",
    "Quarterfinal 3",
    "Quarterfinal 4",
];
pub const SEMIFINALS: [&str; 2] = ["Semifinal 1", "Semifinal 2"];
pub const CUP_THIRD_PLACE: &str = "Cup 3rd Place Playoff";
pub const CUP_FINAL: &str = "Cup Final";
pub const BOWL_SEMIFINALS: [&str; 2] = ["Bowl Semifinal 1", "Bowl Semifinal 2"];
pub const BOWL_THIRD_PLACE: &str = "Bowl 3rd Place";
pub const BOWL_FINAL: &str = "Bowl Final";

/// Cup quarterfinal seeding: (group, position) vs (group, position), zero-based.
const QUARTERFINAL_SEEDS: [((GroupId, usize), (GroupId, usize)); 4] = [
    ((GroupId::A, 0), (GroupId::C, 1)),
    ((GroupId::B, 0), (GroupId::D, 1)),
    ((GroupId::C, 0), (GroupId::A, 1)),
    ((GroupId::D, 0), (GroupId::B, 1)),
];

/// Hands out consecutive match ids and time slots. Callers check up front that every id
/// they book fits in a `MatchId`.
struct SlotClock {
    next_id: MatchId,
    next_start: NaiveTime,
    gap: Duration,
}

impl SlotClock {
    fn new(first_id: MatchId, anchor: NaiveTime, offset_minutes: i64, gap_minutes: i64) -> Self {
        let (next_start, _) = anchor.overflowing_add_signed(Duration::minutes(offset_minutes));
        Self {
            next_id: first_id,
            next_start,
            gap: Duration::minutes(gap_minutes),
        }
    }

    fn book(
        &mut self,
        home: Participant,
        away: Participant,
        round: &str,
        minutes: i64,
    ) -> Fixture {
        let start = self.next_start;
        let (end, _) = start.overflowing_add_signed(Duration::minutes(minutes));
        let fixture = Fixture::new(self.next_id, home, away, round, start, end);
        self.next_id += 1;
        self.next_start = end.overflowing_add_signed(self.gap).0;
        fixture
    }
}

/// Team at `position` of `group` as a named participant, or a precondition error.
fn seeded(
    config: &TournamentConfig,
    standings: &Standings,
    group: GroupId,
    position: usize,
) -> Result<Participant, TournamentError> {
    let entry = standings
        .at(group, position)
        .ok_or(TournamentError::InsufficientStandings {
            group,
            needed: position + 1,
            found: standings.group(group).len(),
        })?;
    Ok(Participant::team(config.display_name(&entry.code)))
}

/// Generate the Cup: four quarterfinals, two semifinals, third-place playoff, final.
///
/// Requires at least two ranked teams in each of groups A-D, Cup ids that fit
/// in a `MatchId` and slot lengths of at most a day. Starts `cup_start_offset` minutes
/// after `last_group_end`.
pub fn generate_cup_bracket(
    config: &TournamentConfig,
    standings: &Standings,
    last_group_end: NaiveTime,
) -> Result<Vec<Fixture>, TournamentError> {
    let timing = &config.timing;
    let ids = timing.cup_match_ids()?;
    timing.check_minutes()?;
    let mut clock = SlotClock::new(
        ids.start,
        last_group_end,
        timing.cup_start_offset,
        timing.gap_minutes,
    );

    let mut fixtures = Vec::with_capacity(8);
    for (round, (home, away)) in QUARTERFINALS.iter().zip(QUARTERFINAL_SEEDS) {
        let home = seeded(config, standings, home.0, home.1)?;
        let away = seeded(config, standings, away.0, away.1)?;
        fixtures.push(clock.book(home, away, round, timing.match_minutes));
    }
    for (round, feeders) in SEMIFINALS.iter().zip(QUARTERFINALS.chunks_exact(2)) {
        fixtures.push(clock.book(
            Participant::winner_of(feeders[0]),
            Participant::winner_of(feeders[1]),
            round,
            timing.match_minutes,
        ));
    }
    fixtures.push(clock.book(
        Participant::loser_of(SEMIFINALS[0]),
        Participant::loser_of(SEMIFINALS[1]),
        CUP_THIRD_PLACE,
        timing.match_minutes,
    ));
    fixtures.push(clock.book(
        Participant::winner_of(SEMIFINALS[0]),
        Participant::winner_of(SEMIFINALS[1]),
        CUP_FINAL,
        timing.final_minutes,
    ));

    log::debug!("Generated cup bracket: matches {}..{}", ids.start, ids.end);
    Ok(fixtures)
}

/// Generate the Bowl: the four third-placed teams play two semifinals, then a
/// third-place match and a final.
///
/// Requires at least three ranked teams in each of groups A-D, Bowl ids that fit
/// in a `MatchId` and slot lengths of at most a day. Starts `bowl_start_offset` minutes
/// after `last_group_end`.
pub fn generate_bowl_bracket(
    config: &TournamentConfig,
    standings: &Standings,
    last_group_end: NaiveTime,
) -> Result<Vec<Fixture>, TournamentError> {
    let timing = &config.timing;
    let ids = timing.bowl_match_ids()?;
    timing.check_minutes()?;
    let mut clock = SlotClock::new(
        ids.start,
        last_group_end,
        timing.bowl_start_offset,
        timing.gap_minutes,
    );

    let third = GroupId::ALL
        .iter()
        .map(|&group| seeded(config, standings, group, 2))
        .collect::<Result<Vec<_>, _>>()?;

    let mut fixtures = Vec::with_capacity(4);
    for (round, pair) in BOWL_SEMIFINALS.iter().zip(third.chunks_exact(2)) {
        fixtures.push(clock.book(
            pair[0].clone(),
            pair[1].clone(),
            round,
            timing.match_minutes,
        ));
    }
    fixtures.push(clock.book(
        Participant::loser_of(BOWL_SEMIFINALS[0]),
        Participant::loser_of(BOWL_SEMIFINALS[1]),
        BOWL_THIRD_PLACE,
        timing.match_minutes,
    ));
    fixtures.push(clock.book(
        Participant::winner_of(BOWL_SEMIFINALS[0]),
        Participant::winner_of(BOWL_SEMIFINALS[1]),
        BOWL_FINAL,
        timing.final_minutes,
    ));

    log::debug!("Generated bowl bracket: matches {}..{}", ids.start, ids.end);
    Ok(fixtures)
}
