use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::{Party, PartyId};
use crate::domain::repositories::{ErrorKind, PartyRepository, RepositoryError};

/// Get party details use case
pub struct GetPartyDetails<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> GetPartyDetails<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, party_id: PartyId) -> Result<Party, GetPartyDetailsError> {
        Ok(self.party_repo.find_by_id(party_id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetPartyDetailsError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for GetPartyDetailsError {
    fn kind(&self) -> ErrorKind {
        match self {
            GetPartyDetailsError::Repository(e) => e.kind,
        }
    }
}
