//! StandingsRow and the per-group ranked tables.

use crate::models::team::GroupId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated group-stage record of one team.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl StandingsRow {
    /// Apply one scored match from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        if scored > conceded {
            self.wins += 1;
            self.points += 3;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
            self.points += 1;
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Ranking key, compared descending.
    pub fn rank_key(&self) -> (u32, i64, u32) {
        (self.points, self.goal_difference(), self.goals_for)
    }
}

/// One line of a group table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub row: StandingsRow,
}

/// Ranked tables for every group, best team first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Standings {
    groups: BTreeMap<GroupId, Vec<TeamStanding>>,
}

impl Standings {
    pub fn new(groups: BTreeMap<GroupId, Vec<TeamStanding>>) -> Self {
        Self { groups }
    }

    /// Ranked table of a group; empty if the group has no teams.
    pub fn group(&self, group: GroupId) -> &[TeamStanding] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The team at zero-based `position` in `group`, if the table is that long.
    pub fn at(&self, group: GroupId, position: usize) -> Option<&TeamStanding> {
        self.group(group).get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &[TeamStanding])> {
        self.groups.iter().map(|(g, rows)| (*g, rows.as_slice()))
    }
}
