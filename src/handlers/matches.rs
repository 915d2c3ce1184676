use axum::{extract::State, response::Json};

use crate::errors::Result;
use crate::extract::{JsonBody, PathParam};
use crate::models::rest::{Match, PlayerScorer};
use crate::state::AppState;

pub async fn get_matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>> {
    let matches = state.matches.get_matches().await?;

    tracing::info!("✅ Successfully fetched {} matches", matches.len());
    Ok(Json(
        matches
            .into_iter()
            .map(|m| state.match_rest.to_rest(m))
            .collect(),
    ))
}

pub async fn get_match_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Match>> {
    let found = state.matches.get_match_by_id(id).await?;
    Ok(Json(state.match_rest.to_rest(found)))
}

pub async fn add_goals(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<Vec<PlayerScorer>>,
) -> Result<Json<Match>> {
    tracing::info!("🎯 Adding {} goals to Match#{}", payload.len(), id);

    let scorers = payload
        .into_iter()
        .map(|scorer| state.match_rest.scorer_to_domain(scorer))
        .collect();

    let updated = state.matches.add_goals(id, scorers).await.map_err(|e| {
        tracing::warn!("❌ Goals for Match#{} rejected: {}", id, e);
        e
    })?;

    Ok(Json(state.match_rest.to_rest(updated)))
}
