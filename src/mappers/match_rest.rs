use super::PlayerRestMapper;
use crate::models::{domain, rest};

#[derive(Debug, Default, Clone, Copy)]
pub struct MatchRestMapper {
    players: PlayerRestMapper,
}

impl MatchRestMapper {
    pub fn to_rest(&self, domain: domain::Match) -> rest::Match {
        rest::Match {
            id: domain.id,
            team_a: self.team_match_to_rest(domain.team_a),
            team_b: self.team_match_to_rest(domain.team_b),
            stadium: domain.stadium,
            datetime: domain.datetime,
        }
    }

    pub fn scorer_to_rest(&self, scorer: domain::PlayerScorer) -> rest::PlayerScorer {
        rest::PlayerScorer {
            player: self.players.to_rest(scorer.player),
            score_time: scorer.minute,
            is_og: scorer.is_own_goal,
        }
    }

    pub fn scorer_to_domain(&self, scorer: rest::PlayerScorer) -> domain::PlayerScorer {
        domain::PlayerScorer {
            player: self.players.to_domain(scorer.player),
            minute: scorer.score_time,
            is_own_goal: scorer.is_og,
        }
    }

    fn team_match_to_rest(&self, side: domain::TeamMatch) -> rest::TeamMatch {
        rest::TeamMatch {
            team: side.team.into(),
            score: side.score,
            scorers: side
                .scorers
                .into_iter()
                .map(|scorer| self.scorer_to_rest(scorer))
                .collect(),
        }
    }
}
