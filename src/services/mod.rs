pub mod match_service;
pub mod player_service;
pub mod team_service;

pub use match_service::MatchService;
pub use player_service::PlayerService;
pub use team_service::TeamService;
