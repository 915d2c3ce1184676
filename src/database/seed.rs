//! Reference fixtures. Kept in step with `migrations/20230101000000_init.sql`.

use chrono::{DateTime, Duration, Utc};

/// 2023-01-01T14:00:00Z
const KICKOFF: i64 = 1_672_581_600;

pub struct TeamSeed {
    pub id: i32,
    pub name: &'static str,
}

pub struct PlayerSeed {
    pub id: i32,
    pub name: &'static str,
    pub guardian: bool,
    pub team_id: i32,
}

pub struct MatchSeed {
    pub id: i32,
    pub stadium: &'static str,
    pub datetime: DateTime<Utc>,
    pub team_a_id: i32,
    pub team_b_id: i32,
}

pub struct ScoreSeed {
    pub player_id: i32,
    pub scorer_team_id: i32,
    pub match_id: i32,
    pub minute: i32,
    pub own_goal: bool,
}

pub const TEAMS: [TeamSeed; 3] = [
    TeamSeed { id: 1, name: "E1" },
    TeamSeed { id: 2, name: "E2" },
    TeamSeed { id: 3, name: "E3" },
];

pub const PLAYERS: [PlayerSeed; 6] = [
    PlayerSeed { id: 1, name: "J1", guardian: false, team_id: 1 },
    PlayerSeed { id: 2, name: "J2", guardian: false, team_id: 2 },
    PlayerSeed { id: 3, name: "J3", guardian: false, team_id: 2 },
    PlayerSeed { id: 4, name: "J4", guardian: false, team_id: 2 },
    PlayerSeed { id: 5, name: "J5", guardian: true, team_id: 3 },
    PlayerSeed { id: 6, name: "J6", guardian: false, team_id: 3 },
];

const fn score(
    player_id: i32,
    scorer_team_id: i32,
    match_id: i32,
    minute: i32,
    own_goal: bool,
) -> ScoreSeed {
    ScoreSeed { player_id, scorer_team_id, match_id, minute, own_goal }
}

pub const SCORES: [ScoreSeed; 8] = [
    score(1, 1, 1, 10, false),
    score(1, 1, 1, 20, false),
    score(1, 1, 1, 30, false),
    score(1, 1, 1, 40, true),
    score(4, 2, 1, 50, true),
    score(3, 2, 1, 50, false),
    score(3, 2, 2, 70, false),
    score(6, 3, 2, 80, true),
];

/// Every fixture match kicks off at 2023-01-01T14:00:00Z in stadium S2.
pub fn matches() -> Vec<MatchSeed> {
    let kickoff = DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(KICKOFF);
    let fixture = |id, team_a_id, team_b_id| MatchSeed {
        id,
        stadium: "S2",
        datetime: kickoff,
        team_a_id,
        team_b_id,
    };
    vec![fixture(1, 1, 2), fixture(2, 2, 3), fixture(3, 1, 3)]
}
