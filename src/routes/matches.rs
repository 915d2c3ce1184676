use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::matches::{add_goals, get_match_by_id, get_matches};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_matches))
        .route("/:id", get(get_match_by_id))
        .route("/:id/goals", post(add_goals))
}
