use crate::models::{domain, entity::TeamEntity, rest};

impl From<&TeamEntity> for domain::Team {
    fn from(entity: &TeamEntity) -> Self {
        domain::Team {
            id: entity.id,
            name: entity.name.clone(),
        }
    }
}

impl From<domain::Team> for rest::Team {
    fn from(team: domain::Team) -> Self {
        rest::Team {
            id: team.id,
            name: team.name,
        }
    }
}
