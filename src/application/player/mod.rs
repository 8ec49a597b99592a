mod create_player;
mod delete_player;

pub use create_player::*;
pub use delete_player::*;
