//! Scoreboard web server: API via REST, static from /static, landing page for
//! everything else so client-side routing keeps working.
//! Run with: cargo run --bin web
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (e.g. data).

use actix_files::Files;
use actix_web::{
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use scoreboard_web::GameStore;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = Data::new(GameStore::open(&data_dir)?);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(scoreboard_web::api::configure)
            .service(Files::new("/static", "static"))
            .default_service(web::get().to(serve_index_async))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
