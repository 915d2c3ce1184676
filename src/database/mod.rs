pub mod connection;
pub mod memory;
pub mod mysql;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::entity::{MatchEntity, PlayerEntity, PlayerScoreEntity, TeamEntity};

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<TeamEntity>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<TeamEntity>>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PlayerEntity>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<PlayerEntity>>;
    /// Inserts or replaces every player by id. All or nothing.
    async fn save_all(&self, players: Vec<PlayerEntity>) -> Result<Vec<PlayerEntity>>;
}

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MatchEntity>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<MatchEntity>>;
}

#[async_trait]
pub trait PlayerScoreRepository: Send + Sync {
    /// Inserts every goal and returns them with their assigned ids. All or nothing.
    async fn save_all(&self, scores: Vec<PlayerScoreEntity>) -> Result<Vec<PlayerScoreEntity>>;
}

/// The store collaborators handed to mappers and services.
#[derive(Clone)]
pub struct Repositories {
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub scores: Arc<dyn PlayerScoreRepository>,
}

impl Repositories {
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: TeamRepository + PlayerRepository + MatchRepository + PlayerScoreRepository + 'static,
    {
        Self {
            teams: store.clone(),
            players: store.clone(),
            matches: store.clone(),
            scores: store,
        }
    }
}
