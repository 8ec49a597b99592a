use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::{CommunityId, Player};
use crate::domain::repositories::{ErrorKind, PlayerRepository, RepositoryError};

/// Create player input
pub struct CreatePlayerInput {
    pub nickname: String,
    pub community_id: CommunityId,
}

/// Create player use case
pub struct CreatePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> CreatePlayer<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, input: CreatePlayerInput) -> Result<Player, CreatePlayerError> {
        let nickname = non_blank(&input.nickname)
            .ok_or_else(|| CreatePlayerError::Validation("Nickname is required".into()))?;

        let player = self.player_repo.create(nickname, input.community_id).await?;
        tracing::info!("Added player {} to community {}", player.id, input.community_id);
        Ok(player)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePlayerError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for CreatePlayerError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreatePlayerError::Validation(_) => ErrorKind::Validation,
            CreatePlayerError::Repository(e) => e.kind,
        }
    }
}
