//! Single binary web server: JSON API over the schedule and score CSV files.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, SCHEDULE_FILE, SCORES_FILE, TEAMS_FILE.

use actix_web::{
    get, put,
    web::{self, Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use rhl_tournament_web::{
    CsvScheduleStore, CsvScoreStore, FullSchedule, MatchId, TournamentConfig, TournamentEngine,
    TournamentError,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Engine plus stores. The score store is behind a lock so only one writer updates the file.
struct AppContext {
    engine: TournamentEngine,
    schedule: CsvScheduleStore,
    scores: RwLock<CsvScoreStore>,
}

type AppState = Data<AppContext>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct BracketsResponse {
    available: bool,
    cup: Option<rhl_tournament_web::BracketView>,
    bowl: Option<rhl_tournament_web::BracketView>,
}

#[derive(Deserialize)]
struct UpdateScoreBody {
    match_id: MatchId,
    score: String,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownMatch(_) => HttpResponse::NotFound().json(body),
        TournamentError::InvalidScore(_) => HttpResponse::BadRequest().json(body),
        _ => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn poisoned() -> TournamentError {
    TournamentError::Io("score store lock poisoned".to_string())
}

/// Derive the full schedule under a read lock on the score store.
fn load_schedule(ctx: &AppContext) -> Result<FullSchedule, TournamentError> {
    let scores = ctx.scores.read().map_err(|_| poisoned())?;
    ctx.engine.load_full_schedule(&ctx.schedule, &*scores)
}

/// Run store work on the blocking pool; the CSV files are read and written synchronously.
async fn blocking<F>(state: &AppState, work: F) -> Result<FullSchedule, HttpResponse>
where
    F: FnOnce(&AppContext) -> Result<FullSchedule, TournamentError> + Send + 'static,
{
    let ctx = state.clone();
    match web::block(move || work(ctx.get_ref())).await {
        Ok(result) => result.map_err(error_response),
        Err(e) => {
            log::error!("Blocking task failed: {}", e);
            Err(HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": e.to_string() })))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "rhl-tournament-web",
    })
}

/// Fixtures, scores, standings and whether the group stage is complete.
#[get("/api/schedule")]
async fn api_schedule(state: AppState) -> HttpResponse {
    match blocking(&state, load_schedule).await {
        Ok(full) => HttpResponse::Ok().json(&full),
        Err(resp) => resp,
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    match blocking(&state, load_schedule).await {
        Ok(full) => HttpResponse::Ok().json(&full.standings),
        Err(resp) => resp,
    }
}

/// Cup and Bowl brackets; both null until every group match has a score.
#[get("/api/brackets")]
async fn api_brackets(state: AppState) -> HttpResponse {
    match blocking(&state, load_schedule).await {
        Ok(full) => HttpResponse::Ok().json(BracketsResponse {
            available: full.group_stage_complete,
            cup: full.cup_bracket(),
            bowl: full.bowl_bracket(),
        }),
        Err(resp) => resp,
    }
}

/// Matches still waiting for a score.
#[get("/api/matches/pending")]
async fn api_pending_matches(state: AppState) -> HttpResponse {
    match blocking(&state, load_schedule).await {
        Ok(full) => HttpResponse::Ok().json(full.pending_matches()),
        Err(resp) => resp,
    }
}

/// Add or edit the score of a group or knockout match. Returns the new full schedule.
#[put("/api/scores")]
async fn api_update_score(state: AppState, body: Json<UpdateScoreBody>) -> HttpResponse {
    let UpdateScoreBody { match_id, score } = body.into_inner();
    let updated = blocking(&state, move |ctx| {
        {
            let mut scores = ctx.scores.write().map_err(|_| poisoned())?;
            ctx.engine.record_score(&ctx.schedule, &mut *scores, match_id, &score)?;
        }
        load_schedule(ctx)
    })
    .await;
    match updated {
        Ok(full) => HttpResponse::Ok().json(&full),
        Err(resp) => resp,
    }
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn load_config() -> std::io::Result<TournamentConfig> {
    let config = match std::env::var("TEAMS_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            log::info!("Loading teams from {}", path.trim());
            TournamentConfig::from_json_file(path.trim())
        }
        _ => {
            let config = TournamentConfig::rhl_2025();
            config.validate().map(|()| config)
        }
    };
    config.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let schedule_file = env_or("SCHEDULE_FILE", "group_schedule.csv");
    let scores_file = env_or("SCORES_FILE", "scores.csv");
    let config = load_config()?;
    log::info!(
        "{} teams, schedule {}, scores {}",
        config.teams.len(),
        schedule_file,
        scores_file
    );

    let state = Data::new(AppContext {
        engine: TournamentEngine::new(config),
        schedule: CsvScheduleStore::new(schedule_file),
        scores: RwLock::new(CsvScoreStore::new(scores_file)),
    });

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_schedule)
            .service(api_standings)
            .service(api_brackets)
            .service(api_pending_matches)
            .service(api_update_score)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    const SCHEDULE_CSV: &str = "\
match,teams,group,start_time,end_time
1,A1 vs A2,A,09:00:00,09:12:00
2,A1 vs A3,A,09:15:00,09:27:00
";

    fn state_in(dir: &std::path::Path) -> AppState {
        let schedule_path = dir.join("group_schedule.csv");
        std::fs::write(&schedule_path, SCHEDULE_CSV).unwrap();
        Data::new(AppContext {
            engine: TournamentEngine::new(TournamentConfig::rhl_2025()),
            schedule: CsvScheduleStore::new(schedule_path),
            scores: RwLock::new(CsvScoreStore::new(dir.join("scores.csv"))),
        })
    }

    fn score_request(match_id: MatchId, score: &str) -> test::TestRequest {
        test::TestRequest::put()
            .uri("/api/scores")
            .set_json(serde_json::json!({ "match_id": match_id, "score": score }))
    }

    #[actix_web::test]
    async fn schedule_lists_group_fixtures_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let app =
            test::init_service(App::new().app_data(state_in(dir.path())).service(api_schedule))
                .await;

        let req = test::TestRequest::get().uri("/api/schedule").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["group_stage_complete"], false);
        assert_eq!(body["fixtures"].as_array().map(Vec::len), Some(2));
        assert!(dir.path().join("scores.csv").exists());
    }

    #[actix_web::test]
    async fn score_updates_are_saved_and_checked() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_in(dir.path()))
                .service(api_update_score),
        )
        .await;

        let resp = test::call_service(&app, score_request(1, "2-1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["scores"]["1"], "2-1");

        let resp = test::call_service(&app, score_request(1, "two-one").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, score_request(99, "1-0").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let saved = std::fs::read_to_string(dir.path().join("scores.csv")).unwrap();
        assert!(saved.contains("1,2-1"));
        assert!(!saved.contains("99"));
    }
}
