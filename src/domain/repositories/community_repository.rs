use async_trait::async_trait;

use crate::domain::entities::{Community, CommunityId};
use crate::domain::repositories::RepositoryError;

/// Community repository trait
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Fetch every community visible to the session
    async fn find_all(&self) -> Result<Vec<Community>, RepositoryError>;

    /// Fetch one community with its players and teams
    async fn find_by_id(&self, id: CommunityId) -> Result<Community, RepositoryError>;

    async fn create(&self, name: &str) -> Result<Community, RepositoryError>;

    async fn delete(&self, id: CommunityId) -> Result<(), RepositoryError>;
}
