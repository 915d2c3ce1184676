use axum::{routing::get, Router};

use crate::handlers::players::{create_players, get_players, update_players};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_players).post(create_players).put(update_players))
}
