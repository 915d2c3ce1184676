use std::sync::Arc;

use crate::database::{MatchRepository, PlayerScoreRepository};
use crate::errors::{AppError, Result};
use crate::mappers::{MatchMapper, PlayerMapper};
use crate::models::domain::{Match, PlayerScorer};

pub const MIN_SCORE_MINUTE: i32 = 0;
pub const MAX_SCORE_MINUTE: i32 = 90;

#[derive(Clone)]
pub struct MatchService {
    match_repository: Arc<dyn MatchRepository>,
    score_repository: Arc<dyn PlayerScoreRepository>,
    player_mapper: PlayerMapper,
    match_mapper: MatchMapper,
}

impl MatchService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository>,
        score_repository: Arc<dyn PlayerScoreRepository>,
        player_mapper: PlayerMapper,
        match_mapper: MatchMapper,
    ) -> Self {
        Self {
            match_repository,
            score_repository,
            player_mapper,
            match_mapper,
        }
    }

    pub async fn get_matches(&self) -> Result<Vec<Match>> {
        let matches = self.match_repository.find_all().await?;
        Ok(matches.iter().map(|m| self.match_mapper.to_domain(m)).collect())
    }

    pub async fn get_match_by_id(&self, id: i32) -> Result<Match> {
        let entity = self
            .match_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match#{id} not found")))?;
        Ok(self.match_mapper.to_domain(&entity))
    }

    /// Records a batch of goals against one match and returns the updated match.
    ///
    /// Every goal is resolved against the store and checked before anything is
    /// written, then the batch is saved in one go: a single bad goal rejects
    /// all of them. Rejections name the player as stored, not as sent.
    pub async fn add_goals(&self, match_id: i32, scorers: Vec<PlayerScorer>) -> Result<Match> {
        let current = self
            .match_repository
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match#{match_id} not found")))?;

        let mut entities = Vec::with_capacity(scorers.len());
        for scorer in &scorers {
            let entity = self.player_mapper.scorer_to_entity(match_id, scorer).await?;
            check_score_time(&entity.player.name, entity.minute)?;

            let team_id = entity.scorer_team_id;
            if team_id != current.team_a.id && team_id != current.team_b.id {
                return Err(AppError::BadRequest(format!(
                    "Player#{} does not play in Match#{}.",
                    entity.player.name, match_id
                )));
            }
            entities.push(entity);
        }

        let saved = self.score_repository.save_all(entities).await?;
        tracing::info!("⚽ Recorded {} goals for Match#{}", saved.len(), match_id);

        self.get_match_by_id(match_id).await
    }
}

fn check_score_time(player_name: &str, minute: i32) -> Result<()> {
    if minute > MAX_SCORE_MINUTE {
        return Err(AppError::BadRequest(format!(
            "Player#{player_name} cannot score before after minute {MAX_SCORE_MINUTE}."
        )));
    }
    if minute < MIN_SCORE_MINUTE {
        return Err(AppError::BadRequest(format!(
            "Player#{player_name} cannot score before minute {MIN_SCORE_MINUTE}."
        )));
    }
    Ok(())
}
