//! Conversions between the REST, domain and persistence layers.

pub mod match_mapper;
pub mod match_rest;
pub mod player;
pub mod player_rest;
pub mod team;

pub use match_mapper::MatchMapper;
pub use match_rest::MatchRestMapper;
pub use player::PlayerMapper;
pub use player_rest::PlayerRestMapper;
