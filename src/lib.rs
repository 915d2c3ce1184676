//! REST backend for football matches, teams, players and goal scorers.

pub mod config;
pub mod database;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod mappers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use errors::{AppError, Result};
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "Football Matches API" }))
        .nest("/matches", routes::matches::routes())
        .nest("/players", routes::players::routes())
        .nest("/teams", routes::teams::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
