use async_trait::async_trait;

use crate::domain::entities::{CommunityId, Party, PartyId, TeamId};
use crate::domain::repositories::RepositoryError;

/// Values for a party about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParty {
    pub game_name: String,
    pub team_ids: Vec<TeamId>,
    pub community_id: CommunityId,
}

/// Party repository trait
#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// Fetch all parties (the backend does not filter by community)
    async fn find_all(&self) -> Result<Vec<Party>, RepositoryError>;

    async fn find_by_id(&self, id: PartyId) -> Result<Party, RepositoryError>;

    async fn create(&self, party: &NewParty) -> Result<Party, RepositoryError>;

    /// Mark the party finished, optionally recording a winner
    async fn end(
        &self,
        party_id: PartyId,
        team_winner_id: Option<TeamId>,
    ) -> Result<(), RepositoryError>;

    async fn delete(&self, id: PartyId) -> Result<(), RepositoryError>;
}
