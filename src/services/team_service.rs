use std::sync::Arc;

use crate::database::TeamRepository;
use crate::errors::Result;
use crate::models::domain::Team;

#[derive(Clone)]
pub struct TeamService {
    team_repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(team_repository: Arc<dyn TeamRepository>) -> Self {
        Self { team_repository }
    }

    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        let teams = self.team_repository.find_all().await?;
        Ok(teams.iter().map(Team::from).collect())
    }
}
