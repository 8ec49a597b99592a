//! Wire shapes exchanged with the backend

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CommunityId, PartyId, PlayerId, TeamId, User};

/// Success body: `{ data, timestamp }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error body: `{ message, timestamp }`
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentUserBody {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct CreateCommunityRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreatePlayerRequest<'a> {
    pub nickname: &'a str,
    pub community_id: CommunityId,
}

#[derive(Debug, Serialize)]
pub struct CreateTeamRequest<'a> {
    pub name: &'a str,
    pub community_id: CommunityId,
}

#[derive(Debug, Serialize)]
pub struct AddPlayersRequest<'a> {
    pub team_id: TeamId,
    pub players_ids: &'a [PlayerId],
}

/// Full roster replacement
#[derive(Debug, Serialize)]
pub struct ReplacePlayersRequest<'a> {
    pub team_id: TeamId,
    pub name: &'a str,
    pub players_ids: &'a [PlayerId],
}

#[derive(Debug, Serialize)]
pub struct RenameTeamRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreatePartyRequest<'a> {
    pub game_name: &'a str,
    pub teams_ids: &'a [TeamId],
    pub community_id: CommunityId,
}

#[derive(Debug, Serialize)]
pub struct EndPartyRequest {
    pub party_id: PartyId,
    /// Omitted entirely when the party ends without a winner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_winner_id: Option<TeamId>,
}
