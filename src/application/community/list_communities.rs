use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::Community;
use crate::domain::repositories::{CommunityRepository, ErrorKind, RepositoryError};

/// List communities use case
pub struct ListCommunities<C: CommunityRepository> {
    community_repo: Arc<C>,
}

impl<C: CommunityRepository> ListCommunities<C> {
    pub fn new(community_repo: Arc<C>) -> Self {
        Self { community_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Community>, ListCommunitiesError> {
        Ok(self.community_repo.find_all().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListCommunitiesError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for ListCommunitiesError {
    fn kind(&self) -> ErrorKind {
        match self {
            ListCommunitiesError::Repository(e) => e.kind,
        }
    }
}
