mod auth_repo;
mod community_repo;
mod party_repo;
mod player_repo;
mod team_repo;

pub use auth_repo::*;
pub use community_repo::*;
pub use party_repo::*;
pub use player_repo::*;
pub use team_repo::*;
