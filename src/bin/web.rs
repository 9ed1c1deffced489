//! Stateless JSON API over the bracket engine, for previewing schedules and payouts.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Nothing is stored: callers persist the returned records themselves.

use actix_web::{
    get, post,
    web::{Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use pool_bracket_engine::{
    calculate_match_payouts, calculate_prize_distribution, determine_round_robin_type,
    generate_round_robin, plan_bracket, regenerate_bracket, BracketConfig, BracketError, Player,
    RoundRobinType,
};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RoundRobinBody {
    players: Vec<Player>,
    #[serde(rename = "type", default)]
    kind: RoundRobinType,
}

#[derive(Deserialize)]
struct PrizeDistributionBody {
    total_prize_pool: f64,
    num_rounds: usize,
}

#[derive(Deserialize)]
struct MatchPayoutsBody {
    round_payout: f64,
    num_matches: usize,
    #[serde(default)]
    num_bye_matches: usize,
}

#[derive(Deserialize)]
struct RegenerateBody {
    players: Vec<Player>,
    #[serde(rename = "type", default)]
    kind: RoundRobinType,
    starting_round_number: u32,
}

/// Path segment: field size (e.g. /api/round-robin-type/{player_count})
#[derive(Deserialize)]
struct PlayerCountPath {
    player_count: usize,
}

fn bad_request(e: BracketError) -> HttpResponse {
    log::warn!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pool-bracket-engine",
    })
}

/// Suggested repetition for a field size.
#[get("/api/round-robin-type/{player_count}")]
async fn api_round_robin_type(path: Path<PlayerCountPath>) -> HttpResponse {
    let kind = determine_round_robin_type(path.player_count);
    HttpResponse::Ok().json(serde_json::json!({ "type": kind }))
}

/// Generate the round-robin schedule for a roster.
#[post("/api/round-robin")]
async fn api_round_robin(body: Json<RoundRobinBody>) -> HttpResponse {
    match generate_round_robin(&body.players, body.kind) {
        Ok(rounds) => HttpResponse::Ok().json(rounds),
        Err(e) => bad_request(e),
    }
}

/// Per-round prizes for a pool and round count.
#[post("/api/prize-distribution")]
async fn api_prize_distribution(body: Json<PrizeDistributionBody>) -> HttpResponse {
    match calculate_prize_distribution(body.total_prize_pool, body.num_rounds) {
        Ok(payouts) => HttpResponse::Ok().json(payouts),
        Err(e) => bad_request(e),
    }
}

/// Per-match payouts for one round.
#[post("/api/match-payouts")]
async fn api_match_payouts(body: Json<MatchPayoutsBody>) -> HttpResponse {
    let payouts = calculate_match_payouts(body.round_payout, body.num_matches, body.num_bye_matches);
    HttpResponse::Ok().json(payouts)
}

/// Full plan: schedule, prizes and records ready to persist.
#[post("/api/brackets")]
async fn api_plan_bracket(body: Json<BracketConfig>) -> HttpResponse {
    match plan_bracket(&body, &mut rand::thread_rng()) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => bad_request(e),
    }
}

/// Continue a bracket with the remaining players, numbering from the caller's cursor.
#[post("/api/brackets/regenerate")]
async fn api_regenerate_bracket(body: Json<RegenerateBody>) -> HttpResponse {
    match regenerate_bracket(&body.players, body.kind, body.starting_round_number) {
        Ok(rounds) => HttpResponse::Ok().json(rounds),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
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

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_round_robin_type)
            .service(api_round_robin)
            .service(api_prize_distribution)
            .service(api_match_payouts)
            .service(api_plan_bracket)
            .service(api_regenerate_bracket)
    })
    .bind(bind)?
    .run()
    .await
}
