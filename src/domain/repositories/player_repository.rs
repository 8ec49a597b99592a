use async_trait::async_trait;

use crate::domain::entities::{CommunityId, Player, PlayerId};
use crate::domain::repositories::RepositoryError;

/// Player repository trait
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create(
        &self,
        nickname: &str,
        community_id: CommunityId,
    ) -> Result<Player, RepositoryError>;

    async fn delete(&self, id: PlayerId) -> Result<(), RepositoryError>;
}
