//! Business records shared by the REST and persistence layers.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub is_guardian: bool,
    pub team_name: String,
}

/// Partial update of a [`Player`]. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub id: i32,
    pub name: Option<String>,
    pub is_guardian: Option<bool>,
}

/// One goal event within a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScorer {
    pub player: Player,
    pub minute: i32,
    pub is_own_goal: bool,
}

/// One side of a match with the goals credited to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMatch {
    pub team: Team,
    pub score: i32,
    pub scorers: Vec<PlayerScorer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: i32,
    pub team_a: TeamMatch,
    pub team_b: TeamMatch,
    pub stadium: String,
    pub datetime: DateTime<Utc>,
}
