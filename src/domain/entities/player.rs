use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

/// Player entity - a member of exactly one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    /// Omitted by the backend on players nested inside a community
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<super::CommunityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
