mod create_party;
mod delete_party;
mod end_party;
mod get_party_details;
mod list_parties;

pub use create_party::*;
pub use delete_party::*;
pub use end_party::*;
pub use get_party_details::*;
pub use list_parties::*;
