use std::sync::Arc;

use crate::application::{distinct, UseCaseError};
use crate::domain::entities::{PlayerId, TeamId};
use crate::domain::repositories::{ErrorKind, RepositoryError, TeamRepository};

/// Add players input
pub struct AddPlayersToTeamInput {
    pub team_id: TeamId,
    pub player_ids: Vec<PlayerId>,
}

/// Add players to a team's roster.
///
/// The backend owns the resulting membership; no duplicate check against the
/// current roster happens here.
pub struct AddPlayersToTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> AddPlayersToTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, input: AddPlayersToTeamInput) -> Result<(), AddPlayersError> {
        let player_ids = distinct(&input.player_ids);
        if player_ids.is_empty() {
            return Err(AddPlayersError::Validation(
                "Please select at least one player".into(),
            ));
        }

        self.team_repo.add_players(input.team_id, &player_ids).await?;
        tracing::info!("Added {} players to team {}", player_ids.len(), input.team_id);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddPlayersError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for AddPlayersError {
    fn kind(&self) -> ErrorKind {
        match self {
            AddPlayersError::Validation(_) => ErrorKind::Validation,
            AddPlayersError::Repository(e) => e.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{Call, FakeStore};

    #[tokio::test]
    async fn test_add_players_submits_selection() {
        let store = Arc::new(FakeStore::new());
        AddPlayersToTeam::new(store.clone())
            .execute(AddPlayersToTeamInput {
                team_id: 7,
                player_ids: vec![4, 2, 4],
            })
            .await
            .unwrap();

        assert_eq!(store.calls(), vec![Call::AddPlayers(7, vec![4, 2])]);
    }

    #[tokio::test]
    async fn test_empty_selection_issues_no_request() {
        let store = Arc::new(FakeStore::new());
        let err = AddPlayersToTeam::new(store.clone())
            .execute(AddPlayersToTeamInput {
                team_id: 7,
                player_ids: vec![],
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Please select at least one player");
        assert!(store.calls().is_empty());
    }
}
