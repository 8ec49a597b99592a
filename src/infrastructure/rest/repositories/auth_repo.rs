use async_trait::async_trait;
use reqwest::Method;

use crate::domain::entities::User;
use crate::domain::repositories::{
    AuthGrant, AuthRepository, Credentials, Registration, RepositoryError,
};
use crate::infrastructure::rest::dto::CurrentUserBody;
use crate::infrastructure::rest::{Operation, RemoteStore};

/// REST implementation of AuthRepository
pub struct HttpAuthRepository {
    store: RemoteStore,
}

impl HttpAuthRepository {
    pub fn new(store: RemoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, RepositoryError> {
        self.store
            .request(Operation::Login, Method::POST, "/auth/login", Some(credentials))
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthGrant, RepositoryError> {
        self.store
            .request(
                Operation::Register,
                Method::POST,
                "/auth/register",
                Some(registration),
            )
            .await
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        let body: CurrentUserBody = self.store.get(Operation::CurrentUser, "/auth/me").await?;
        Ok(body.user)
    }
}
