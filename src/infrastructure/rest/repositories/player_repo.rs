use async_trait::async_trait;
use reqwest::Method;

use crate::domain::entities::{CommunityId, Player, PlayerId};
use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::infrastructure::rest::dto::CreatePlayerRequest;
use crate::infrastructure::rest::{Operation, RemoteStore};

/// REST implementation of PlayerRepository
pub struct HttpPlayerRepository {
    store: RemoteStore,
}

impl HttpPlayerRepository {
    pub fn new(store: RemoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlayerRepository for HttpPlayerRepository {
    async fn create(
        &self,
        nickname: &str,
        community_id: CommunityId,
    ) -> Result<Player, RepositoryError> {
        self.store
            .request(
                Operation::CreatePlayer,
                Method::POST,
                "/players",
                Some(&CreatePlayerRequest {
                    nickname,
                    community_id,
                }),
            )
            .await
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepositoryError> {
        self.store
            .delete(Operation::DeletePlayer, &format!("/players/{}", id))
            .await
    }
}
