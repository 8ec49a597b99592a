use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Authenticated principal returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
