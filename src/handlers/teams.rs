use axum::{extract::State, response::Json};

use crate::errors::Result;
use crate::models::rest::Team;
use crate::state::AppState;

pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>> {
    let teams = state.teams.get_teams().await?;

    tracing::info!("✅ Successfully fetched {} teams", teams.len());
    Ok(Json(teams.into_iter().map(Team::from).collect()))
}
