use async_trait::async_trait;
use reqwest::Method;

use crate::domain::entities::{Community, CommunityId};
use crate::domain::repositories::{CommunityRepository, RepositoryError};
use crate::infrastructure::rest::dto::CreateCommunityRequest;
use crate::infrastructure::rest::{Operation, RemoteStore};

/// REST implementation of CommunityRepository
pub struct HttpCommunityRepository {
    store: RemoteStore,
}

impl HttpCommunityRepository {
    pub fn new(store: RemoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommunityRepository for HttpCommunityRepository {
    async fn find_all(&self) -> Result<Vec<Community>, RepositoryError> {
        self.store.get(Operation::ListCommunities, "/communities").await
    }

    async fn find_by_id(&self, id: CommunityId) -> Result<Community, RepositoryError> {
        self.store
            .get(Operation::GetCommunity, &format!("/communities/{}", id))
            .await
    }

    async fn create(&self, name: &str) -> Result<Community, RepositoryError> {
        self.store
            .request(
                Operation::CreateCommunity,
                Method::POST,
                "/communities",
                Some(&CreateCommunityRequest { name }),
            )
            .await
    }

    async fn delete(&self, id: CommunityId) -> Result<(), RepositoryError> {
        self.store
            .delete(Operation::DeleteCommunity, &format!("/communities/{}", id))
            .await
    }
}
