use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::PlayerId;
use crate::domain::repositories::{ErrorKind, PlayerRepository, RepositoryError};

/// Delete player use case
pub struct DeletePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> DeletePlayer<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, player_id: PlayerId) -> Result<(), DeletePlayerError> {
        self.player_repo.delete(player_id).await?;
        tracing::info!("Deleted player {}", player_id);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePlayerError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for DeletePlayerError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeletePlayerError::Repository(e) => e.kind,
        }
    }
}
