use axum::{extract::State, response::Json};

use crate::errors::Result;
use crate::extract::JsonBody;
use crate::models::rest::{Player, PlayerUpdate};
use crate::state::AppState;

pub async fn get_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>> {
    let players = state.players.get_players().await?;

    tracing::info!("✅ Successfully fetched {} players", players.len());
    Ok(Json(
        players
            .into_iter()
            .map(|p| state.player_rest.to_rest(p))
            .collect(),
    ))
}

pub async fn create_players(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Vec<Player>>,
) -> Result<Json<Vec<Player>>> {
    let to_create = payload
        .into_iter()
        .map(|p| state.player_rest.to_domain(p))
        .collect();

    let created = state.players.create_players(to_create).await?;
    Ok(Json(
        created
            .into_iter()
            .map(|p| state.player_rest.to_rest(p))
            .collect(),
    ))
}

pub async fn update_players(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Vec<PlayerUpdate>>,
) -> Result<Json<Vec<Player>>> {
    let to_update = payload
        .into_iter()
        .map(|p| state.player_rest.to_domain_update(p))
        .collect();

    let updated = state.players.update_players(to_update).await?;
    Ok(Json(
        updated
            .into_iter()
            .map(|p| state.player_rest.to_rest(p))
            .collect(),
    ))
}
