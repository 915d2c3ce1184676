use std::sync::Arc;

use crate::database::{MatchRepository, PlayerRepository, Repositories, TeamRepository};
use crate::errors::{AppError, Result};
use crate::models::domain::{Player, PlayerScorer, PlayerUpdate};
use crate::models::entity::{PlayerEntity, PlayerScoreEntity};

/// Entity <-> domain conversion for players and their goals.
///
/// Building an entity resolves every reference against the store and fails
/// with [`AppError::NotFound`] when one is missing.
#[derive(Clone)]
pub struct PlayerMapper {
    match_repository: Arc<dyn MatchRepository>,
    player_repository: Arc<dyn PlayerRepository>,
    team_repository: Arc<dyn TeamRepository>,
}

impl PlayerMapper {
    pub fn new(
        match_repository: Arc<dyn MatchRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        team_repository: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            match_repository,
            player_repository,
            team_repository,
        }
    }

    pub fn from_repositories(repositories: &Repositories) -> Self {
        Self::new(
            repositories.matches.clone(),
            repositories.players.clone(),
            repositories.teams.clone(),
        )
    }

    pub fn to_domain(&self, entity: &PlayerEntity) -> Player {
        Player {
            id: entity.id,
            name: entity.name.clone(),
            is_guardian: entity.guardian,
            team_name: entity.team.name.clone(),
        }
    }

    pub fn scorer_to_domain(&self, entity: &PlayerScoreEntity) -> PlayerScorer {
        PlayerScorer {
            player: self.to_domain(&entity.player),
            minute: entity.minute,
            is_own_goal: entity.own_goal,
        }
    }

    /// Builds a goal row for `match_id`, stamped with the scorer's current team.
    pub async fn scorer_to_entity(
        &self,
        match_id: i32,
        scorer: &PlayerScorer,
    ) -> Result<PlayerScoreEntity> {
        let player = self.find_player(scorer.player.id).await?;
        let found = self
            .match_repository
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match#{match_id} not found")))?;

        Ok(PlayerScoreEntity {
            id: None,
            scorer_team_id: player.team.id,
            player,
            match_id: found.id,
            minute: scorer.minute,
            own_goal: scorer.is_own_goal,
        })
    }

    pub async fn to_entity(&self, domain: &Player) -> Result<PlayerEntity> {
        let team = self
            .team_repository
            .find_by_name(&domain.team_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team#{} not found", domain.team_name)))?;

        Ok(PlayerEntity {
            id: domain.id,
            name: domain.name.clone(),
            guardian: domain.is_guardian,
            team,
        })
    }

    pub async fn update_to_entity(&self, domain: &PlayerUpdate) -> Result<PlayerEntity> {
        let mut entity = self.find_player(domain.id).await?;
        if let Some(name) = &domain.name {
            entity.name = name.clone();
        }
        if let Some(is_guardian) = domain.is_guardian {
            entity.guardian = is_guardian;
        }
        Ok(entity)
    }

    async fn find_player(&self, id: i32) -> Result<PlayerEntity> {
        self.player_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player#{id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::InMemoryStore;

    fn mapper() -> PlayerMapper {
        let repositories = Repositories::from_store(Arc::new(InMemoryStore::seeded()));
        PlayerMapper::from_repositories(&repositories)
    }

    fn player(id: i32, name: &str, team_name: &str) -> Player {
        Player {
            id,
            name: name.into(),
            is_guardian: false,
            team_name: team_name.into(),
        }
    }

    #[tokio::test]
    async fn player_entity_resolves_team_by_name() {
        let entity = mapper().to_entity(&player(7, "J7", "E3")).await.unwrap();
        assert_eq!(entity.team.id, 3);
        assert_eq!(mapper().to_domain(&entity), player(7, "J7", "E3"));
    }

    #[tokio::test]
    async fn unknown_team_fails_loudly() {
        let err = mapper().to_entity(&player(7, "J7", "E9")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Team#E9 not found"));
    }

    #[tokio::test]
    async fn scorer_entity_needs_known_player_and_match() {
        let scorer = PlayerScorer {
            player: player(1, "J1", "E1"),
            minute: 5,
            is_own_goal: false,
        };

        let entity = mapper().scorer_to_entity(3, &scorer).await.unwrap();
        assert_eq!(entity.id, None);
        assert_eq!(entity.match_id, 3);
        assert_eq!(entity.player.team.name, "E1");
        assert_eq!(entity.scorer_team_id, 1);
        assert_eq!(mapper().scorer_to_domain(&entity), scorer);

        let err = mapper().scorer_to_entity(99, &scorer).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Match#99 not found"));

        let ghost = PlayerScorer {
            player: player(99, "J99", "E1"),
            ..scorer
        };
        let err = mapper().scorer_to_entity(3, &ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Player#99 not found"));
    }

    #[tokio::test]
    async fn update_only_touches_present_fields() {
        let update = PlayerUpdate {
            id: 2,
            name: Some("J2 bis".into()),
            is_guardian: None,
        };
        let entity = mapper().update_to_entity(&update).await.unwrap();

        assert_eq!(entity.name, "J2 bis");
        assert!(!entity.guardian);
        assert_eq!(entity.team.name, "E2");
    }

    #[tokio::test]
    async fn update_of_unknown_player_fails_immediately() {
        let update = PlayerUpdate {
            id: 42,
            name: None,
            is_guardian: Some(true),
        };
        assert!(matches!(
            mapper().update_to_entity(&update).await,
            Err(AppError::NotFound(_))
        ));
    }
}
