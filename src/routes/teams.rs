use axum::{routing::get, Router};

use crate::handlers::teams::get_teams;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_teams))
}
