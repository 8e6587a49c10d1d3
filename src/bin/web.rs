//! Single binary web server for the ladder: registration pool, ladder days, generated matches.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Env: HOST, PORT, REGISTRATIONS_CSV (seed the pool from a CSV file),
//! FIRST_LADDER_DAY (RFC 3339 date of the next ladder day).

use actix_web::{
    get, post, put,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use ladder_scheduler::{
    generate_if_due, read_registrations, Ladder, LadderDay, LadderError, MapCatalog, User,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::sync::RwLock;
use std::time::Duration;

/// In-memory ladder plus the map pool it draws from.
struct LadderState {
    ladder: RwLock<Ladder>,
    catalog: MapCatalog,
}

type AppState = Data<LadderState>;

/// How often the background trigger checks whether the next ladder day is due.
const GENERATION_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct LadderResponse<'a> {
    next_day: Option<&'a LadderDay>,
    latest_event: Option<&'a LadderDay>,
}

#[derive(Deserialize)]
struct UserBody {
    discord_id: String,
    #[serde(default)]
    username: String,
}

#[derive(Deserialize)]
struct RegisterTeamBody {
    roster: Vec<UserBody>,
}

#[derive(Deserialize)]
struct LadderDayBody {
    date: DateTime<Utc>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "ladder-scheduler",
    })
}

/// Run generation if the next ladder day is due. Logs instead of failing: the caller
/// still wants to serve the current ladder.
fn try_generate(ladder: &mut Ladder, catalog: &MapCatalog) {
    match generate_if_due(ladder, catalog, Utc::now()) {
        Ok(Some(id)) => log::info!("Generated matches for ladder day {}", id),
        Ok(None) => {}
        Err(e @ LadderError::InsufficientTeams { .. }) => {
            log::info!("Ladder day is due but not generated yet: {}", e)
        }
        Err(e) => log::warn!("Match generation failed: {}", e),
    }
}

/// Next ladder day and the latest event with matches. Generates matches first when due.
#[get("/api/ladder")]
async fn api_get_ladder(state: AppState) -> HttpResponse {
    let mut g = match state.ladder.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    try_generate(&mut g, &state.catalog);
    HttpResponse::Ok().json(LadderResponse {
        next_day: g.next_day.as_ref(),
        latest_event: g.latest_event(),
    })
}

/// Registered teams, largest rosters first.
#[get("/api/ladder/teams")]
async fn api_get_teams(state: AppState) -> HttpResponse {
    let g = match state.ladder.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.registered_teams_by_roster_size())
}

/// Register a team for the next ladder day.
#[post("/api/ladder/teams")]
async fn api_register_team(state: AppState, body: Json<RegisterTeamBody>) -> HttpResponse {
    let mut g = match state.ladder.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let roster = body
        .into_inner()
        .roster
        .into_iter()
        .map(|u| User::new(u.discord_id.trim(), u.username.trim()))
        .collect();
    match g.register_team(roster) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "team_id": id })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Set the date of the next ladder day.
#[put("/api/ladder/day")]
async fn api_set_ladder_day(state: AppState, body: Json<LadderDayBody>) -> HttpResponse {
    let mut g = match state.ladder.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.schedule_day(body.date) {
        Ok(_) => HttpResponse::Ok().json(&g.next_day),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Build the starting ladder from env: optional first ladder day and CSV registrations.
fn initial_ladder() -> Ladder {
    let mut ladder = Ladder::new();

    if let Ok(raw) = std::env::var("FIRST_LADDER_DAY") {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(date) => {
                let _ = ladder.schedule_day(date.with_timezone(&Utc));
            }
            Err(e) => log::warn!("Ignoring FIRST_LADDER_DAY {:?}: {}", raw, e),
        }
    }

    if let Ok(path) = std::env::var("REGISTRATIONS_CSV") {
        let rosters = File::open(&path)
            .map_err(|e| e.to_string())
            .and_then(|f| read_registrations(f).map_err(|e| e.to_string()));
        match rosters {
            Ok(rosters) => {
                for roster in rosters {
                    if let Err(e) = ladder.register_team(roster) {
                        log::warn!("Skipping registration from {}: {}", path, e);
                    }
                }
                log::info!("Loaded {} registered team(s) from {}", ladder.registrations.len(), path);
            }
            Err(e) => log::warn!("Could not load registrations from {}: {}", path, e),
        }
    }

    ladder
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(LadderState {
        ladder: RwLock::new(initial_ladder()),
        catalog: MapCatalog::default(),
    });

    // Background trigger: generate matches once the next ladder day has started
    let state_trigger = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(GENERATION_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_trigger.ladder.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            try_generate(&mut g, &state_trigger.catalog);
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_ladder)
            .service(api_get_teams)
            .service(api_register_team)
            .service(api_set_ladder_day)
    })
    .bind(bind)?
    .run()
    .await
}
