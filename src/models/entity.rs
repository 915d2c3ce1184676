//! Persisted shapes with their associations resolved.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TeamEntity {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntity {
    pub id: i32,
    pub name: String,
    pub guardian: bool,
    pub team: TeamEntity,
}

/// A goal row. `id` is `None` until the store has assigned one.
///
/// `scorer_team_id` is the team the player belonged to when the goal was
/// recorded. Later transfers do not change which side the goal counts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScoreEntity {
    pub id: Option<i32>,
    pub player: PlayerEntity,
    pub scorer_team_id: i32,
    pub match_id: i32,
    pub minute: i32,
    pub own_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntity {
    pub id: i32,
    pub team_a: TeamEntity,
    pub team_b: TeamEntity,
    pub stadium: String,
    pub datetime: DateTime<Utc>,
    /// Ordered by recording order.
    pub scorers: Vec<PlayerScoreEntity>,
}
