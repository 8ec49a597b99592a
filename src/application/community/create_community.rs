use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::Community;
use crate::domain::repositories::{CommunityRepository, ErrorKind, RepositoryError};

/// Create community use case
pub struct CreateCommunity<C: CommunityRepository> {
    community_repo: Arc<C>,
}

impl<C: CommunityRepository> CreateCommunity<C> {
    pub fn new(community_repo: Arc<C>) -> Self {
        Self { community_repo }
    }

    pub async fn execute(&self, name: &str) -> Result<Community, CreateCommunityError> {
        let name = non_blank(name)
            .ok_or_else(|| CreateCommunityError::Validation("Community name is required".into()))?;

        let community = self.community_repo.create(name).await?;
        tracing::info!("Created community {} ({})", community.id, community.name);
        Ok(community)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCommunityError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for CreateCommunityError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreateCommunityError::Validation(_) => ErrorKind::Validation,
            CreateCommunityError::Repository(e) => e.kind,
        }
    }
}
