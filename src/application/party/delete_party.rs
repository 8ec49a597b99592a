use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::PartyId;
use crate::domain::repositories::{ErrorKind, PartyRepository, RepositoryError};

/// Delete party use case; allowed in any state
pub struct DeleteParty<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> DeleteParty<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, party_id: PartyId) -> Result<(), DeletePartyError> {
        self.party_repo.delete(party_id).await?;
        tracing::info!("Deleted party {}", party_id);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePartyError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for DeletePartyError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeletePartyError::Repository(e) => e.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{Call, FakeStore};

    #[tokio::test]
    async fn test_delete_party() {
        let store = Arc::new(FakeStore::new());
        DeleteParty::new(store.clone()).execute(8).await.unwrap();
        assert_eq!(store.calls(), vec![Call::DeleteParty(8)]);
    }

    #[tokio::test]
    async fn test_delete_party_failure_keeps_message() {
        let store = Arc::new(FakeStore::new());
        store.fail_with(RepositoryError::transport("Failed to delete party"));

        let err = DeleteParty::new(store).execute(8).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "Failed to delete party");
    }
}
