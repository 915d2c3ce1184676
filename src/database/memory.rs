use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::seed;
use super::{MatchRepository, PlayerRepository, PlayerScoreRepository, TeamRepository};
use crate::errors::{AppError, Result};
use crate::models::entity::{MatchEntity, PlayerEntity, PlayerScoreEntity, TeamEntity};

#[derive(Debug, Clone)]
struct PlayerRecord {
    name: String,
    guardian: bool,
    team_id: i32,
}

#[derive(Debug, Clone)]
struct MatchRecord {
    stadium: String,
    datetime: DateTime<Utc>,
    team_a_id: i32,
    team_b_id: i32,
}

#[derive(Debug, Clone)]
struct ScoreRecord {
    id: i32,
    player_id: i32,
    scorer_team_id: i32,
    match_id: i32,
    minute: i32,
    own_goal: bool,
}

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<i32, String>,
    players: BTreeMap<i32, PlayerRecord>,
    matches: BTreeMap<i32, MatchRecord>,
    scores: Vec<ScoreRecord>,
    next_score_id: i32,
}

impl Tables {
    fn team(&self, id: i32) -> Result<TeamEntity> {
        self.teams
            .get(&id)
            .map(|name| TeamEntity { id, name: name.clone() })
            .ok_or_else(|| AppError::NotFound(format!("Team#{id} not found")))
    }

    fn player(&self, id: i32) -> Result<Option<PlayerEntity>> {
        let Some(record) = self.players.get(&id) else {
            return Ok(None);
        };
        Ok(Some(PlayerEntity {
            id,
            name: record.name.clone(),
            guardian: record.guardian,
            team: self.team(record.team_id)?,
        }))
    }

    fn match_entity(&self, id: i32) -> Result<Option<MatchEntity>> {
        let Some(record) = self.matches.get(&id) else {
            return Ok(None);
        };

        let mut scorers = Vec::new();
        for score in self.scores.iter().filter(|score| score.match_id == id) {
            let player = self.player(score.player_id)?.ok_or_else(|| {
                AppError::NotFound(format!("Player#{} not found", score.player_id))
            })?;
            scorers.push(PlayerScoreEntity {
                id: Some(score.id),
                player,
                scorer_team_id: score.scorer_team_id,
                match_id: id,
                minute: score.minute,
                own_goal: score.own_goal,
            });
        }

        Ok(Some(MatchEntity {
            id,
            team_a: self.team(record.team_a_id)?,
            team_b: self.team(record.team_b_id)?,
            stadium: record.stadium.clone(),
            datetime: record.datetime,
            scorers,
        }))
    }
}

/// Process-local store. Every read and write goes through one lock, so a
/// batch save is never observed half applied.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the reference fixtures from [`seed`].
    pub fn seeded() -> Self {
        let mut tables = Tables::default();

        for team in seed::TEAMS.iter() {
            tables.teams.insert(team.id, team.name.to_string());
        }
        for player in seed::PLAYERS.iter() {
            tables.players.insert(
                player.id,
                PlayerRecord {
                    name: player.name.to_string(),
                    guardian: player.guardian,
                    team_id: player.team_id,
                },
            );
        }
        for m in seed::matches() {
            tables.matches.insert(
                m.id,
                MatchRecord {
                    stadium: m.stadium.to_string(),
                    datetime: m.datetime,
                    team_a_id: m.team_a_id,
                    team_b_id: m.team_b_id,
                },
            );
        }
        for score in seed::SCORES.iter() {
            tables.next_score_id += 1;
            tables.scores.push(ScoreRecord {
                id: tables.next_score_id,
                player_id: score.player_id,
                scorer_team_id: score.scorer_team_id,
                match_id: score.match_id,
                minute: score.minute,
                own_goal: score.own_goal,
            });
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<TeamEntity>> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .iter()
            .map(|(id, name)| TeamEntity { id: *id, name: name.clone() })
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TeamEntity>> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .iter()
            .find(|(_, team_name)| team_name.as_str() == name)
            .map(|(id, team_name)| TeamEntity { id: *id, name: team_name.clone() }))
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<PlayerEntity>> {
        let tables = self.tables.read().await;
        let mut players = Vec::with_capacity(tables.players.len());
        for id in tables.players.keys() {
            if let Some(player) = tables.player(*id)? {
                players.push(player);
            }
        }
        Ok(players)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PlayerEntity>> {
        self.tables.read().await.player(id)
    }

    async fn save_all(&self, players: Vec<PlayerEntity>) -> Result<Vec<PlayerEntity>> {
        let mut tables = self.tables.write().await;

        if let Some(player) = players.iter().find(|p| !tables.teams.contains_key(&p.team.id)) {
            return Err(AppError::NotFound(format!("Team#{} not found", player.team.name)));
        }

        for player in &players {
            tables.players.insert(
                player.id,
                PlayerRecord {
                    name: player.name.clone(),
                    guardian: player.guardian,
                    team_id: player.team.id,
                },
            );
        }

        Ok(players)
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<MatchEntity>> {
        let tables = self.tables.read().await;
        let mut matches = Vec::with_capacity(tables.matches.len());
        for id in tables.matches.keys() {
            if let Some(entity) = tables.match_entity(*id)? {
                matches.push(entity);
            }
        }
        Ok(matches)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MatchEntity>> {
        self.tables.read().await.match_entity(id)
    }
}

#[async_trait]
impl PlayerScoreRepository for InMemoryStore {
    async fn save_all(&self, scores: Vec<PlayerScoreEntity>) -> Result<Vec<PlayerScoreEntity>> {
        let mut tables = self.tables.write().await;

        for score in &scores {
            if !tables.players.contains_key(&score.player.id) {
                return Err(AppError::NotFound(format!("Player#{} not found", score.player.id)));
            }
            if !tables.matches.contains_key(&score.match_id) {
                return Err(AppError::NotFound(format!("Match#{} not found", score.match_id)));
            }
        }

        let mut saved = Vec::with_capacity(scores.len());
        for mut score in scores {
            tables.next_score_id += 1;
            let id = tables.next_score_id;
            tables.scores.push(ScoreRecord {
                id,
                player_id: score.player.id,
                scorer_team_id: score.scorer_team_id,
                match_id: score.match_id,
                minute: score.minute,
                own_goal: score.own_goal,
            });
            score.id = Some(id);
            saved.push(score);
        }

        Ok(saved)
    }
}
