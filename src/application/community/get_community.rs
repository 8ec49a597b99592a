use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::{Community, CommunityId};
use crate::domain::repositories::{CommunityRepository, ErrorKind, RepositoryError};

/// Fetch one community with its players and teams
pub struct GetCommunity<C: CommunityRepository> {
    community_repo: Arc<C>,
}

impl<C: CommunityRepository> GetCommunity<C> {
    pub fn new(community_repo: Arc<C>) -> Self {
        Self { community_repo }
    }

    pub async fn execute(&self, community_id: CommunityId) -> Result<Community, GetCommunityError> {
        Ok(self.community_repo.find_by_id(community_id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetCommunityError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for GetCommunityError {
    fn kind(&self) -> ErrorKind {
        match self {
            GetCommunityError::Repository(e) => e.kind,
        }
    }
}
