use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommunityId, Team, TeamId};

pub type PartyId = i64;

/// Party status, derived from `finished_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyStatus {
    Active,
    Finished,
}

impl PartyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyStatus::Active => "active",
            PartyStatus::Finished => "finished",
        }
    }
}

/// Party entity - a match between two or more teams of a community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub community_id: CommunityId,
    pub game_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_winner_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Party {
    pub fn status(&self) -> PartyStatus {
        match self.finished_at {
            Some(_) => PartyStatus::Finished,
            None => PartyStatus::Active,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() == PartyStatus::Finished
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.teams.iter().any(|t| t.id == team_id)
    }

    /// Winning team, if one was declared and is part of this party
    pub fn winner(&self) -> Option<&Team> {
        let winner_id = self.team_winner_id?;
        self.teams.iter().find(|t| t.id == winner_id)
    }
}

/// Keep the parties belonging to `community_id`, in their original order.
pub fn filter_by_community(parties: Vec<Party>, community_id: CommunityId) -> Vec<Party> {
    parties
        .into_iter()
        .filter(|p| p.community_id == community_id)
        .collect()
}
