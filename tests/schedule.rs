//! Integration tests for the full-schedule pipeline and score recording.

mod common;

use common::{by_round, group_schedule, home_wins_everywhere, time};
use rhl_tournament_web::{
    Fixture, MemoryScheduleStore, MemoryScoreStore, Participant, ScoreBook, ScoreStore,
    TournamentConfig, TournamentEngine, TournamentError,
};

fn engine() -> TournamentEngine {
    TournamentEngine::new(TournamentConfig::rhl_2025())
}

fn stores(book: ScoreBook) -> (MemoryScheduleStore, MemoryScoreStore) {
    (
        MemoryScheduleStore::new(group_schedule()),
        MemoryScoreStore::new(book),
    )
}

#[test]
fn one_missing_score_withholds_the_knockouts() {
    let book: ScoreBook = home_wins_everywhere()
        .iter()
        .filter(|(id, _)| *id != 7)
        .map(|(id, s)| (id, s.to_string()))
        .collect();
    let (schedule, score_store) = stores(book);

    let full = engine().load_full_schedule(&schedule, &score_store).unwrap();
    assert!(!full.group_stage_complete);
    assert_eq!(full.fixtures.len(), 12);
    assert!(full.fixtures.iter().all(|f| f.match_id <= 12));
    assert!(full.cup_bracket().is_none());
    assert_eq!(full.pending_matches().len(), 1);
    assert_eq!(full.pending_matches()[0].match_id, 7);
}

#[test]
fn complete_group_stage_appends_cup_then_bowl() {
    let (schedule, score_store) = stores(home_wins_everywhere());
    let full = engine().load_full_schedule(&schedule, &score_store).unwrap();

    assert!(full.group_stage_complete);
    let ids: Vec<_> = full.fixtures.iter().map(|f| f.match_id).collect();
    let expected: Vec<u32> = (1..=20).chain(25..=28).collect();
    assert_eq!(ids, expected);
    assert_eq!(
        by_round(&full.fixtures, "Quarterfinal 1").teams(),
        "Royal Lions vs Royal Bulls"
    );
    let bowl_final = by_round(&full.fixtures, "Bowl Final");
    assert_eq!(bowl_final.end.format("%H:%M").to_string(), "13:04");
}

#[test]
fn group_fixtures_show_display_names() {
    let (schedule, score_store) = stores(ScoreBook::new());
    let full = engine().load_full_schedule(&schedule, &score_store).unwrap();
    assert_eq!(full.fixtures[0].teams(), "Royal Lions vs Royal Tuskers");
    assert_eq!(full.fixtures[11].teams(), "Royal Rhinos vs Royal Wolves");
    // Standings stay keyed by code.
    assert_eq!(full.standings.group(rhl_tournament_web::GroupId::A)[0].code, "A1");
}

#[test]
fn knockout_scores_resolve_through_to_the_final() {
    let mut book = home_wins_everywhere();
    // QF1 Lions beat Bulls, QF2 Rhinos beat Sharks, SF1 Rhinos beat Lions.
    book.upsert(13, "3-1");
    book.upsert(14, "0-2");
    book.upsert(17, "1-2");
    let (schedule, score_store) = stores(book);
    let full = engine().load_full_schedule(&schedule, &score_store).unwrap();

    assert_eq!(
        by_round(&full.fixtures, "Semifinal 1").teams(),
        "Royal Lions vs Royal Rhinos"
    );
    assert_eq!(
        by_round(&full.fixtures, "Cup Final").teams(),
        "Royal Rhinos vs Winner Semifinal 2"
    );
    assert_eq!(
        by_round(&full.fixtures, "Cup 3rd Place Playoff").teams(),
        "Royal Lions vs Loser Semifinal 2"
    );

    let cup = full.cup_bracket().unwrap();
    assert_eq!(cup.rounds.len(), 8);
    assert_eq!(cup.rounds[0].round, "Quarterfinal 1");
    assert_eq!(cup.rounds[0].matches[0].score, "3-1");
    assert_eq!(cup.rounds[2].matches[0].score, "TBD");
    let bowl = full.bowl_bracket().unwrap();
    assert_eq!(
        bowl.rounds.iter().map(|r| r.round.as_str()).collect::<Vec<_>>(),
        ["Bowl Semifinal 1", "Bowl Semifinal 2", "Bowl 3rd Place", "Bowl Final"]
    );
}

#[test]
fn malformed_group_score_still_counts_as_entered() {
    let mut book = home_wins_everywhere();
    book.upsert(1, "forfeit");
    let (schedule, score_store) = stores(book);
    let full = engine().load_full_schedule(&schedule, &score_store).unwrap();
    assert!(full.group_stage_complete);
    // Match 1 contributes nothing: A1 and A2 both finish on 3 points.
    let a = full.standings.group(rhl_tournament_web::GroupId::A);
    assert_eq!(a[0].row.points, 3);
    assert_eq!(a[1].row.points, 3);
}

#[test]
fn empty_schedule_is_not_complete() {
    let engine = engine();
    let full = engine
        .load_full_schedule(&MemoryScheduleStore::default(), &MemoryScoreStore::default())
        .unwrap();
    assert!(!full.group_stage_complete);
    assert!(full.fixtures.is_empty());
}

#[test]
fn short_group_fails_with_precondition_error() {
    let mut config = TournamentConfig::rhl_2025();
    config.teams.retain(|t| t.code != "C3");
    let (schedule, score_store) = stores(home_wins_everywhere());
    let err = TournamentEngine::new(config)
        .load_full_schedule(&schedule, &score_store)
        .unwrap_err();
    assert!(matches!(err, TournamentError::InsufficientStandings { needed: 3, .. }));
}

#[test]
fn record_score_upserts_known_matches() {
    let engine = engine();
    let (schedule, mut score_store) = stores(ScoreBook::new());

    engine.record_score(&schedule, &mut score_store, 3, " 2-2 ").unwrap();
    engine.record_score(&schedule, &mut score_store, 3, "4-1").unwrap();
    let book = score_store.load_scores().unwrap();
    assert_eq!(book.raw(3), Some("4-1"));
    assert_eq!(book.len(), 1);

    assert_eq!(
        engine.record_score(&schedule, &mut score_store, 13, "1-0"),
        Err(TournamentError::UnknownMatch(13))
    );
    assert_eq!(
        engine.record_score(&schedule, &mut score_store, 3, "abc"),
        Err(TournamentError::InvalidScore("abc".to_string()))
    );
}

#[test]
fn knockout_matches_accept_scores_once_generated() {
    let engine = engine();
    let (schedule, mut score_store) = stores(home_wins_everywhere());
    engine.record_score(&schedule, &mut score_store, 13, "1-0").unwrap();
    engine.record_score(&schedule, &mut score_store, 28, "2-1").unwrap();
    let full = engine.load_full_schedule(&schedule, &score_store).unwrap();
    assert_eq!(full.score_for(13), Some("1-0"));
    assert_eq!(full.score_for(28), Some("2-1"));
}

#[test]
fn oversized_goal_counts_are_rejected() {
    let engine = engine();
    let (schedule, mut score_store) = stores(ScoreBook::new());
    assert_eq!(
        engine.record_score(&schedule, &mut score_store, 1, "4294967295-0"),
        Err(TournamentError::InvalidScore("4294967295-0".to_string()))
    );
    assert!(score_store.load_scores().unwrap().is_empty());
}

#[test]
fn group_fixture_on_a_knockout_id_is_rejected() {
    let mut fixtures = group_schedule();
    fixtures.push(Fixture::new(
        13,
        Participant::team("A1"),
        Participant::team("A2"),
        "A",
        time("12:00:00"),
        time("12:12:00"),
    ));
    let mut book = home_wins_everywhere();
    book.upsert(13, "2-1");
    let schedule = MemoryScheduleStore::new(fixtures);
    let score_store = MemoryScoreStore::new(book);

    let err = engine()
        .load_full_schedule(&schedule, &score_store)
        .unwrap_err();
    assert!(matches!(err, TournamentError::MalformedFixture { match_id: 13, .. }));
}
