//! Group stage: standings from scored group fixtures.

use crate::models::{
    Fixture, GroupId, Participant, ScoreBook, Standings, StandingsRow, TeamStanding,
    TournamentConfig,
};
use std::collections::BTreeMap;

/// Compute ranked tables for every group of the roster.
///
/// 1. Start every rostered team at a zeroed row in its group.
/// 2. Apply each group fixture (round label is a group id) that has a well-formed score.
///    Unscored and malformed scores contribute nothing.
/// 3. Sort each group by points, goal difference, goals for (descending). Remaining ties
///    keep roster order.
pub fn compute_standings(
    config: &TournamentConfig,
    group_fixtures: &[Fixture],
    scores: &ScoreBook,
) -> Standings {
    let mut tables: BTreeMap<GroupId, Vec<TeamStanding>> = BTreeMap::new();
    for team in &config.teams {
        tables.entry(team.group).or_default().push(TeamStanding {
            code: team.code.clone(),
            name: team.name.clone(),
            row: StandingsRow::default(),
        });
    }

    for fixture in group_fixtures {
        let Ok(group) = fixture.round.parse::<GroupId>() else {
            continue;
        };
        let Some(score) = scores.parsed(fixture.match_id) else {
            continue;
        };
        let Some(table) = tables.get_mut(&group) else {
            log::warn!(
                "Match {}: group {} has no rostered teams, skipping",
                fixture.match_id,
                group
            );
            continue;
        };
        let (Some(home), Some(away)) = (
            position_of(table, &fixture.home),
            position_of(table, &fixture.away),
        ) else {
            log::warn!(
                "Match {}: {} is not a pairing of group {} teams, skipping",
                fixture.match_id,
                fixture.teams(),
                group
            );
            continue;
        };
        table[home].row.record(score.home, score.away);
        table[away].row.record(score.away, score.home);
    }

    for table in tables.values_mut() {
        // sort_by is stable: equal keys stay in roster order.
        table.sort_by(|a, b| b.row.rank_key().cmp(&a.row.rank_key()));
    }
    log::debug!("Computed standings for {} group(s)", tables.len());
    Standings::new(tables)
}

fn position_of(table: &[TeamStanding], participant: &Participant) -> Option<usize> {
    let code = participant.team_name()?;
    table.iter().position(|t| t.code == code)
}
