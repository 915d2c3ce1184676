use crate::database::Repositories;
use crate::mappers::{MatchMapper, MatchRestMapper, PlayerMapper, PlayerRestMapper};
use crate::services::{MatchService, PlayerService, TeamService};

#[derive(Clone)]
pub struct AppState {
    pub matches: MatchService,
    pub players: PlayerService,
    pub teams: TeamService,
    pub player_rest: PlayerRestMapper,
    pub match_rest: MatchRestMapper,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        let player_mapper = PlayerMapper::from_repositories(&repositories);
        let match_mapper = MatchMapper::new(player_mapper.clone());

        Self {
            matches: MatchService::new(
                repositories.matches.clone(),
                repositories.scores.clone(),
                player_mapper.clone(),
                match_mapper,
            ),
            players: PlayerService::new(repositories.players.clone(), player_mapper),
            teams: TeamService::new(repositories.teams),
            player_rest: PlayerRestMapper,
            match_rest: MatchRestMapper::default(),
        }
    }
}
