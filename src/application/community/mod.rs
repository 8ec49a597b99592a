mod create_community;
mod delete_community;
mod get_community;
mod list_communities;

pub use create_community::*;
pub use delete_community::*;
pub use get_community::*;
pub use list_communities::*;
