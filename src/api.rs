//! REST API over the game store: read and replace a game's roster.

use crate::models::{GameKey, Player};
use crate::store::GameStore;
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    HttpResponse,
};
use serde_json::Value;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct SavedResponse {
    ok: bool,
    saved: usize,
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "scoreboard-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current roster for a game, verbatim from the store (empty array for an
/// unseen game).
#[get("/api/{game}")]
async fn api_get_roster(store: Data<GameStore>, path: Path<String>) -> HttpResponse {
    let key = GameKey::from_raw(&path);
    HttpResponse::Ok().json(store.read(&key))
}

/// Replace a game's roster. The body must be a JSON array; each element is
/// normalized field by field (see [`Player::from_raw`]), never rejected.
#[post("/api/{game}")]
async fn api_save_roster(
    store: Data<GameStore>,
    path: Path<String>,
    body: Json<Value>,
) -> HttpResponse {
    let key = GameKey::from_raw(&path);
    let items = match body.as_array() {
        Some(items) => items,
        None => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Body deve ser um array de jogadores" }))
        }
    };
    let cleaned: Vec<Player> = items.iter().map(Player::from_raw).collect();
    match store.write(&key, &cleaned) {
        Ok(()) => HttpResponse::Ok().json(SavedResponse {
            ok: true,
            saved: cleaned.len(),
        }),
        Err(e) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Register the API routes on an actix app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_get_roster)
        .service(api_save_roster);
}
