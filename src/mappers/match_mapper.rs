use super::PlayerMapper;
use crate::models::domain::{Match, PlayerScorer, Team, TeamMatch};
use crate::models::entity::{MatchEntity, TeamEntity};

/// Builds domain matches from stored ones.
///
/// A goal counts for the team the scorer played for when it was recorded, or
/// for the opponent when it is an own goal. Each side lists the goals it was
/// credited with, in recording order, and its score is the length of that list.
#[derive(Clone)]
pub struct MatchMapper {
    players: PlayerMapper,
}

impl MatchMapper {
    pub fn new(players: PlayerMapper) -> Self {
        Self { players }
    }

    pub fn to_domain(&self, entity: &MatchEntity) -> Match {
        let mut scorers_a: Vec<PlayerScorer> = Vec::new();
        let mut scorers_b: Vec<PlayerScorer> = Vec::new();

        for score in &entity.scorers {
            let credited_to_a = if score.scorer_team_id == entity.team_a.id {
                !score.own_goal
            } else if score.scorer_team_id == entity.team_b.id {
                score.own_goal
            } else {
                tracing::warn!(
                    "⚠️ Goal by Player#{} for Team#{} is outside Match#{}, minute {} ignored",
                    score.player.name,
                    score.scorer_team_id,
                    entity.id,
                    score.minute
                );
                continue;
            };

            let scorer = self.players.scorer_to_domain(score);
            if credited_to_a {
                scorers_a.push(scorer);
            } else {
                scorers_b.push(scorer);
            }
        }

        Match {
            id: entity.id,
            team_a: team_match(&entity.team_a, scorers_a),
            team_b: team_match(&entity.team_b, scorers_b),
            stadium: entity.stadium.clone(),
            datetime: entity.datetime,
        }
    }
}

fn team_match(team: &TeamEntity, scorers: Vec<PlayerScorer>) -> TeamMatch {
    TeamMatch {
        team: Team::from(team),
        score: scorers.len() as i32,
        scorers,
    }
}
