mod community;
mod party;
mod player;
mod team;
mod user;

pub use community::*;
pub use party::*;
pub use player::*;
pub use team::*;
pub use user::*;

#[cfg(test)]
pub(crate) mod fixtures;
