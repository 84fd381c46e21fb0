use std::sync::{Arc, Mutex};

use serde::Serialize;

use beacon::config::Config;
use beacon::http::request::Request;
use beacon::http::response::{Response, ResponseBuilder};
use beacon::router::{Router, RouterBuilder};
use beacon::server::Server;

/// Stand-in for the game-memory poller the real deployment wires in.
/// Handlers capture it behind a `Mutex`; locking shared state belongs to
/// the handlers, not the engine.
#[derive(Serialize)]
struct GameState {
    started: bool,
    ended: bool,
    item_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            started: true,
            ended: false,
            item_count: 0,
        }
    }
}

fn routes() -> Router {
    let state = Arc::new(Mutex::new(GameState::default()));

    let snapshot = Arc::clone(&state);
    let started = Arc::clone(&state);
    let ended = state;

    RouterBuilder::new()
        .register("GET", "/state", move |_req: &Request| {
            let Ok(state) = snapshot.lock() else {
                return Response::new(500);
            };
            match serde_json::to_vec(&*state) {
                Ok(body) => ResponseBuilder::new(200)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .build(),
                Err(_) => Response::new(500),
            }
        })
        .register("GET", "/game_started", move |_req: &Request| {
            let Ok(state) = started.lock() else {
                return Response::new(500);
            };
            Response::new(if state.started { 200 } else { 404 })
        })
        .register("GET", "/game_ended", move |_req: &Request| {
            let Ok(state) = ended.lock() else {
                return Response::new(500);
            };
            Response::new(if state.ended { 200 } else { 404 })
        })
        .build()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let router = routes();

    match &cfg.tls {
        Some(tls) => {
            Server::bind_tls(cfg.server.port, &tls.certificate, &tls.private_key, router)?
                .run(cfg.server.workers)
        }
        None => Server::bind(cfg.server.port, router)?.run(cfg.server.workers),
    }
}
