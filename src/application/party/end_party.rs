use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::{Party, TeamId};
use crate::domain::repositories::{ErrorKind, PartyRepository, RepositoryError};

/// End party input
pub struct EndPartyInput {
    /// Snapshot of the party being ended
    pub party: Party,
    pub team_winner_id: Option<TeamId>,
}

/// End party use case (Active -> Finished, one-way)
pub struct EndParty<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> EndParty<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, input: EndPartyInput) -> Result<(), EndPartyError> {
        let party = input.party;

        if party.is_finished() {
            return Err(EndPartyError::AlreadyFinished);
        }

        if let Some(winner_id) = input.team_winner_id {
            if !party.has_team(winner_id) {
                return Err(EndPartyError::WinnerNotInParty(winner_id));
            }
        }

        self.party_repo.end(party.id, input.team_winner_id).await?;

        match input.team_winner_id {
            Some(winner_id) => tracing::info!("Ended party {} with winner {}", party.id, winner_id),
            None => tracing::info!("Ended party {} without a winner", party.id),
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EndPartyError {
    #[error("Party has already ended")]
    AlreadyFinished,
    #[error("Team {0} is not part of this party")]
    WinnerNotInParty(TeamId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for EndPartyError {
    fn kind(&self) -> ErrorKind {
        match self {
            EndPartyError::AlreadyFinished | EndPartyError::WinnerNotInParty(_) => {
                ErrorKind::Validation
            }
            EndPartyError::Repository(e) => e.kind,
        }
    }
}
