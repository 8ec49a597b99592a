use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommunityId, Player, PlayerId};

pub type TeamId = i64;

/// Team entity - a named roster of players from one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<CommunityId>,
    #[serde(default)]
    pub players: Vec<Player>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Ids of the current roster, in roster order
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Roster that remains once `removed` players are taken off.
    pub fn retained_player_ids(&self, removed: &[PlayerId]) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !removed.contains(&p.id))
            .map(|p| p.id)
            .collect()
    }
}
