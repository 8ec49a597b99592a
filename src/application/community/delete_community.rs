use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::CommunityId;
use crate::domain::repositories::{CommunityRepository, ErrorKind, RepositoryError};

/// Delete community use case.
///
/// Players, teams and parties are left to the backend (cascade or rejection).
pub struct DeleteCommunity<C: CommunityRepository> {
    community_repo: Arc<C>,
}

impl<C: CommunityRepository> DeleteCommunity<C> {
    pub fn new(community_repo: Arc<C>) -> Self {
        Self { community_repo }
    }

    pub async fn execute(&self, community_id: CommunityId) -> Result<(), DeleteCommunityError> {
        self.community_repo.delete(community_id).await?;
        tracing::info!("Deleted community {}", community_id);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCommunityError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for DeleteCommunityError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeleteCommunityError::Repository(e) => e.kind,
        }
    }
}
