use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::{filter_by_community, CommunityId, Party};
use crate::domain::repositories::{ErrorKind, PartyRepository, RepositoryError};

/// List the parties of one community.
///
/// The backend only serves the full list, so filtering happens here.
pub struct ListCommunityParties<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> ListCommunityParties<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, community_id: CommunityId) -> Result<Vec<Party>, ListPartiesError> {
        let parties = self.party_repo.find_all().await?;
        let total = parties.len();
        let parties = filter_by_community(parties, community_id);
        tracing::debug!(
            "{} of {} parties belong to community {}",
            parties.len(),
            total,
            community_id
        );
        Ok(parties)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListPartiesError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for ListPartiesError {
    fn kind(&self) -> ErrorKind {
        match self {
            ListPartiesError::Repository(e) => e.kind,
        }
    }
}
