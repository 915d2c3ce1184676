use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};

use super::{MatchRepository, PlayerRepository, PlayerScoreRepository, TeamRepository};
use crate::errors::{AppError, Result};
use crate::models::entity::{MatchEntity, PlayerEntity, PlayerScoreEntity, TeamEntity};

const PLAYER_SELECT: &str = r#"
    SELECT p.id, p.name, p.guardian, t.id AS team_id, t.name AS team_name
    FROM players p
    JOIN teams t ON t.id = p.team_id
"#;

const MATCH_SELECT: &str = r#"
    SELECT m.id, m.stadium, m.datetime,
           ta.id AS team_a_id, ta.name AS team_a_name,
           tb.id AS team_b_id, tb.name AS team_b_name
    FROM matches m
    JOIN teams ta ON ta.id = m.team_a_id
    JOIN teams tb ON tb.id = m.team_b_id
"#;

const SCORE_SELECT: &str = r#"
    SELECT s.id, s.match_id, s.scorer_team_id, s.minute, s.own_goal,
           p.id AS player_id, p.name AS player_name, p.guardian AS player_guardian,
           t.id AS team_id, t.name AS team_name
    FROM player_scores s
    JOIN players p ON p.id = s.player_id
    JOIN teams t ON t.id = p.team_id
"#;

#[derive(Debug, FromRow)]
struct PlayerRow {
    id: i32,
    name: String,
    guardian: bool,
    team_id: i32,
    team_name: String,
}

impl From<PlayerRow> for PlayerEntity {
    fn from(row: PlayerRow) -> Self {
        PlayerEntity {
            id: row.id,
            name: row.name,
            guardian: row.guardian,
            team: TeamEntity {
                id: row.team_id,
                name: row.team_name,
            },
        }
    }
}

#[derive(Debug, FromRow)]
struct MatchRow {
    id: i32,
    stadium: String,
    datetime: DateTime<Utc>,
    team_a_id: i32,
    team_a_name: String,
    team_b_id: i32,
    team_b_name: String,
}

impl MatchRow {
    fn into_entity(self, scorers: Vec<PlayerScoreEntity>) -> MatchEntity {
        MatchEntity {
            id: self.id,
            team_a: TeamEntity {
                id: self.team_a_id,
                name: self.team_a_name,
            },
            team_b: TeamEntity {
                id: self.team_b_id,
                name: self.team_b_name,
            },
            stadium: self.stadium,
            datetime: self.datetime,
            scorers,
        }
    }
}

#[derive(Debug, FromRow)]
struct PlayerScoreRow {
    id: i32,
    match_id: i32,
    scorer_team_id: i32,
    minute: i32,
    own_goal: bool,
    player_id: i32,
    player_name: String,
    player_guardian: bool,
    team_id: i32,
    team_name: String,
}

impl From<PlayerScoreRow> for PlayerScoreEntity {
    fn from(row: PlayerScoreRow) -> Self {
        PlayerScoreEntity {
            id: Some(row.id),
            player: PlayerEntity {
                id: row.player_id,
                name: row.player_name,
                guardian: row.player_guardian,
                team: TeamEntity {
                    id: row.team_id,
                    name: row.team_name,
                },
            },
            scorer_team_id: row.scorer_team_id,
            match_id: row.match_id,
            minute: row.minute,
            own_goal: row.own_goal,
        }
    }
}

fn inserted_id(last_insert_id: u64) -> Result<i32> {
    i32::try_from(last_insert_id).map_err(|_| {
        AppError::Database(sqlx::Error::Protocol(format!(
            "player_scores id {last_insert_id} does not fit in INT"
        )))
    })
}

/// Store backed by a MySQL connection pool.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for MySqlStore {
    async fn find_all(&self) -> Result<Vec<TeamEntity>> {
        let teams = sqlx::query_as::<_, TeamEntity>("SELECT id, name FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TeamEntity>> {
        let team = sqlx::query_as::<_, TeamEntity>("SELECT id, name FROM teams WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(team)
    }
}

#[async_trait]
impl PlayerRepository for MySqlStore {
    async fn find_all(&self) -> Result<Vec<PlayerEntity>> {
        let sql = format!("{PLAYER_SELECT} ORDER BY p.id");
        let rows = sqlx::query_as::<_, PlayerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(PlayerEntity::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PlayerEntity>> {
        let sql = format!("{PLAYER_SELECT} WHERE p.id = ?");
        let row = sqlx::query_as::<_, PlayerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(PlayerEntity::from))
    }

    async fn save_all(&self, players: Vec<PlayerEntity>) -> Result<Vec<PlayerEntity>> {
        let mut tx = self.pool.begin().await?;

        for player in &players {
            sqlx::query(
                r#"
                INSERT INTO players (id, name, guardian, team_id)
                VALUES (?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    name = VALUES(name),
                    guardian = VALUES(guardian),
                    team_id = VALUES(team_id)
                "#,
            )
            .bind(player.id)
            .bind(&player.name)
            .bind(player.guardian)
            .bind(player.team.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(players)
    }
}

#[async_trait]
impl MatchRepository for MySqlStore {
    async fn find_all(&self) -> Result<Vec<MatchEntity>> {
        let sql = format!("{MATCH_SELECT} ORDER BY m.id");
        let rows = sqlx::query_as::<_, MatchRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        let sql = format!("{SCORE_SELECT} ORDER BY s.id");
        let mut scores_by_match: HashMap<i32, Vec<PlayerScoreEntity>> = HashMap::new();
        for row in sqlx::query_as::<_, PlayerScoreRow>(&sql)
            .fetch_all(&self.pool)
            .await?
        {
            scores_by_match
                .entry(row.match_id)
                .or_default()
                .push(PlayerScoreEntity::from(row));
        }

        let matches = rows
            .into_iter()
            .map(|row| {
                let scorers = scores_by_match.remove(&row.id).unwrap_or_default();
                row.into_entity(scorers)
            })
            .collect();

        Ok(matches)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MatchEntity>> {
        let sql = format!("{MATCH_SELECT} WHERE m.id = ?");
        let Some(row) = sqlx::query_as::<_, MatchRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let sql = format!("{SCORE_SELECT} WHERE s.match_id = ? ORDER BY s.id");
        let scorers = sqlx::query_as::<_, PlayerScoreRow>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(PlayerScoreEntity::from)
            .collect();

        Ok(Some(row.into_entity(scorers)))
    }
}

#[async_trait]
impl PlayerScoreRepository for MySqlStore {
    async fn save_all(&self, scores: Vec<PlayerScoreEntity>) -> Result<Vec<PlayerScoreEntity>> {
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(scores.len());

        for mut score in scores {
            let result = sqlx::query(
                r#"
                INSERT INTO player_scores (player_id, scorer_team_id, match_id, minute, own_goal)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(score.player.id)
            .bind(score.scorer_team_id)
            .bind(score.match_id)
            .bind(score.minute)
            .bind(score.own_goal)
            .execute(&mut *tx)
            .await?;

            score.id = Some(inserted_id(result.last_insert_id())?);
            saved.push(score);
        }

        tx.commit().await?;
        Ok(saved)
    }
}
