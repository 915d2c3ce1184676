use std::sync::Arc;

use crate::database::PlayerRepository;
use crate::errors::Result;
use crate::mappers::PlayerMapper;
use crate::models::domain::{Player, PlayerUpdate};
use crate::models::entity::PlayerEntity;

#[derive(Clone)]
pub struct PlayerService {
    player_repository: Arc<dyn PlayerRepository>,
    mapper: PlayerMapper,
}

impl PlayerService {
    pub fn new(player_repository: Arc<dyn PlayerRepository>, mapper: PlayerMapper) -> Self {
        Self {
            player_repository,
            mapper,
        }
    }

    pub async fn get_players(&self) -> Result<Vec<Player>> {
        let players = self.player_repository.find_all().await?;
        Ok(players.iter().map(|p| self.mapper.to_domain(p)).collect())
    }

    /// Creates or replaces players by id. Every team name must exist.
    pub async fn create_players(&self, to_create: Vec<Player>) -> Result<Vec<Player>> {
        let mut entities = Vec::with_capacity(to_create.len());
        for player in &to_create {
            entities.push(self.mapper.to_entity(player).await?);
        }
        self.save(entities).await
    }

    pub async fn update_players(&self, to_update: Vec<PlayerUpdate>) -> Result<Vec<Player>> {
        let mut entities = Vec::with_capacity(to_update.len());
        for update in &to_update {
            entities.push(self.mapper.update_to_entity(update).await?);
        }
        self.save(entities).await
    }

    async fn save(&self, entities: Vec<PlayerEntity>) -> Result<Vec<Player>> {
        let saved = self.player_repository.save_all(entities).await?;
        tracing::info!("✅ Successfully saved {} players", saved.len());
        Ok(saved.iter().map(|p| self.mapper.to_domain(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::InMemoryStore;
    use crate::database::Repositories;
    use crate::errors::AppError;

    fn service() -> PlayerService {
        let repositories = Repositories::from_store(Arc::new(InMemoryStore::seeded()));
        PlayerService::new(
            repositories.players.clone(),
            PlayerMapper::from_repositories(&repositories),
        )
    }

    #[tokio::test]
    async fn batch_with_unknown_team_saves_nothing() {
        let service = service();
        let batch = vec![
            Player { id: 7, name: "J7".into(), is_guardian: true, team_name: "E1".into() },
            Player { id: 8, name: "J8".into(), is_guardian: false, team_name: "nowhere".into() },
        ];

        assert!(matches!(service.create_players(batch).await, Err(AppError::NotFound(_))));
        assert_eq!(service.get_players().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn created_players_are_listed() {
        let service = service();
        let created = service
            .create_players(vec![Player {
                id: 7,
                name: "J7".into(),
                is_guardian: true,
                team_name: "E1".into(),
            }])
            .await
            .unwrap();

        assert_eq!(created[0].team_name, "E1");
        let players = service.get_players().await.unwrap();
        assert_eq!(players.len(), 7);
        assert_eq!(players.last().unwrap().name, "J7");
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let service = service();
        let updated = service
            .update_players(vec![PlayerUpdate { id: 5, name: None, is_guardian: Some(false) }])
            .await
            .unwrap();

        assert_eq!(
            updated,
            vec![Player { id: 5, name: "J5".into(), is_guardian: false, team_name: "E3".into() }]
        );
    }
}
