use async_trait::async_trait;
use reqwest::Method;

use crate::domain::entities::{CommunityId, PlayerId, Team, TeamId};
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::infrastructure::rest::dto::{
    AddPlayersRequest, CreateTeamRequest, RenameTeamRequest, ReplacePlayersRequest,
};
use crate::infrastructure::rest::{Operation, RemoteStore};

/// REST implementation of TeamRepository
pub struct HttpTeamRepository {
    store: RemoteStore,
}

impl HttpTeamRepository {
    pub fn new(store: RemoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TeamRepository for HttpTeamRepository {
    async fn create(&self, name: &str, community_id: CommunityId) -> Result<Team, RepositoryError> {
        self.store
            .request(
                Operation::CreateTeam,
                Method::POST,
                "/teams",
                Some(&CreateTeamRequest { name, community_id }),
            )
            .await
    }

    async fn add_players(
        &self,
        team_id: TeamId,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError> {
        self.store
            .execute(
                Operation::AddPlayersToTeam,
                Method::POST,
                "/teams/add-players",
                Some(&AddPlayersRequest {
                    team_id,
                    players_ids: player_ids,
                }),
            )
            .await
    }

    async fn replace_players(
        &self,
        team_id: TeamId,
        name: &str,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError> {
        self.store
            .execute(
                Operation::RemovePlayersFromTeam,
                Method::PATCH,
                "/teams/delete-players",
                Some(&ReplacePlayersRequest {
                    team_id,
                    name,
                    players_ids: player_ids,
                }),
            )
            .await
    }

    async fn rename(&self, team_id: TeamId, name: &str) -> Result<(), RepositoryError> {
        self.store
            .execute(
                Operation::RenameTeam,
                Method::PATCH,
                &format!("/teams/{}", team_id),
                Some(&RenameTeamRequest { name }),
            )
            .await
    }

    async fn delete(&self, team_id: TeamId) -> Result<(), RepositoryError> {
        self.store
            .delete(Operation::DeleteTeam, &format!("/teams/{}", team_id))
            .await
    }
}
