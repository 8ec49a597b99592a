mod add_players_to_team;
mod create_team;
mod delete_team;
mod remove_players_from_team;
mod rename_team;

pub use add_players_to_team::*;
pub use create_team::*;
pub use delete_team::*;
pub use remove_players_from_team::*;
pub use rename_team::*;
