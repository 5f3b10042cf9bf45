//! Full schedule: group fixtures, derived knockout brackets, standings and scores.

use crate::logic::bracket::{generate_bowl_bracket, generate_cup_bracket};
use crate::logic::resolve::resolve_placeholders;
use crate::logic::standings::compute_standings;
use crate::logic::views::{bowl_bracket_view, cup_bracket_view, BracketView};
use crate::models::{
    Fixture, MatchId, Participant, Score, ScoreBook, Standings, TournamentConfig, TournamentError,
};
use crate::store::{ScheduleStore, ScoreStore};
use serde::Serialize;

/// Everything the presentation layer needs for one request.
#[derive(Clone, Debug, Serialize)]
pub struct FullSchedule {
    /// Group fixtures followed (once the group stage is complete) by Cup and Bowl
    /// fixtures, placeholders resolved as far as possible, codes shown as names.
    pub fixtures: Vec<Fixture>,
    pub scores: ScoreBook,
    pub standings: Standings,
    /// Knockout fixtures are only present when this is true.
    pub group_stage_complete: bool,
}

impl FullSchedule {
    pub fn fixture(&self, match_id: MatchId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.match_id == match_id)
    }

    /// Raw score string, if one has been entered.
    pub fn score_for(&self, match_id: MatchId) -> Option<&str> {
        self.scores.raw(match_id)
    }

    /// Fixtures with no score yet, in schedule order.
    pub fn pending_matches(&self) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| !self.scores.has_score(f.match_id))
            .collect()
    }

    /// Cup bracket for display; None until the group stage is complete.
    pub fn cup_bracket(&self) -> Option<BracketView> {
        self.group_stage_complete
            .then(|| cup_bracket_view(&self.fixtures, &self.scores))
    }

    /// Bowl bracket for display; None until the group stage is complete.
    pub fn bowl_bracket(&self) -> Option<BracketView> {
        self.group_stage_complete
            .then(|| bowl_bracket_view(&self.fixtures, &self.scores))
    }
}

/// Derives the full schedule from the two stores. Holds only immutable configuration;
/// nothing is cached between calls.
#[derive(Clone, Debug, Default)]
pub struct TournamentEngine {
    config: TournamentConfig,
}

impl TournamentEngine {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Load group fixtures and scores, and derive everything else.
    ///
    /// Group fixtures must not use ids from the Cup or Bowl ranges; a score stored under
    /// such an id would be read for both matches.
    ///
    /// 1. The group stage is complete when there is at least one group fixture and every
    ///    one has a score (parseability is not checked here).
    /// 2. Standings are always computed.
    /// 3. When complete, Cup then Bowl fixtures are appended, anchored at the end time of
    ///    the last group fixture.
    /// 4. Placeholders are resolved, then team codes are replaced by display names.
    pub fn load_full_schedule<S, C>(
        &self,
        schedule: &S,
        scores: &C,
    ) -> Result<FullSchedule, TournamentError>
    where
        S: ScheduleStore + ?Sized,
        C: ScoreStore + ?Sized,
    {
        let group_fixtures = schedule.load_group_fixtures()?;
        let scores = scores.load_scores()?;
        if let Some(clash) = group_fixtures
            .iter()
            .find(|f| self.config.timing.is_knockout_id(f.match_id))
        {
            return Err(TournamentError::MalformedFixture {
                match_id: clash.match_id,
                reason: "group match id is reserved for a knockout match".to_string(),
            });
        }

        let group_stage_complete = !group_fixtures.is_empty()
            && group_fixtures.iter().all(|f| scores.has_score(f.match_id));
        let standings = compute_standings(&self.config, &group_fixtures, &scores);

        let mut fixtures = group_fixtures;
        let anchor = fixtures.last().map(|f| f.end);
        match (group_stage_complete, anchor) {
            (true, Some(anchor)) => {
                let cup = generate_cup_bracket(&self.config, &standings, anchor)?;
                let bowl = generate_bowl_bracket(&self.config, &standings, anchor)?;
                fixtures.extend(cup);
                fixtures.extend(bowl);
            }
            _ => log::debug!("Group stage incomplete, knockout brackets withheld"),
        }

        let fixtures = resolve_placeholders(fixtures, &scores);
        let fixtures = self.with_display_names(fixtures);

        Ok(FullSchedule {
            fixtures,
            scores,
            standings,
            group_stage_complete,
        })
    }

    /// Upsert a score for a match that exists in the current full schedule.
    pub fn record_score<S, C>(
        &self,
        schedule: &S,
        scores: &mut C,
        match_id: MatchId,
        score: &str,
    ) -> Result<(), TournamentError>
    where
        S: ScheduleStore + ?Sized,
        C: ScoreStore + ?Sized,
    {
        let score = score.trim();
        score
            .parse::<Score>()
            .map_err(|_| TournamentError::InvalidScore(score.to_string()))?;
        let full = self.load_full_schedule(schedule, &*scores)?;
        if full.fixture(match_id).is_none() {
            return Err(TournamentError::UnknownMatch(match_id));
        }
        scores.update_score(match_id, score)
    }

    /// Rewrite team codes ("A1") to display names; other text is left as is.
    fn with_display_names(&self, mut fixtures: Vec<Fixture>) -> Vec<Fixture> {
        for fixture in &mut fixtures {
            for slot in [&mut fixture.home, &mut fixture.away] {
                if let Participant::Team { name } = slot {
                    if let Some(team) = self.config.team_by_code(name) {
                        *name = team.name.clone();
                    }
                }
            }
        }
        fixtures
    }
}
