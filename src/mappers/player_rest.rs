use crate::models::{domain, rest};

/// Wire <-> domain conversion for players. Never touches the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerRestMapper;

impl PlayerRestMapper {
    pub fn to_rest(&self, domain: domain::Player) -> rest::Player {
        rest::Player {
            id: domain.id,
            name: domain.name,
            is_guardian: domain.is_guardian,
            team_name: domain.team_name,
        }
    }

    pub fn to_domain(&self, rest: rest::Player) -> domain::Player {
        domain::Player {
            id: rest.id,
            name: rest.name,
            is_guardian: rest.is_guardian,
            team_name: rest.team_name,
        }
    }

    pub fn to_domain_update(&self, to_update: rest::PlayerUpdate) -> domain::PlayerUpdate {
        domain::PlayerUpdate {
            id: to_update.id,
            name: to_update.name,
            is_guardian: to_update.is_guardian,
        }
    }
}
