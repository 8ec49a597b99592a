//! In-memory repositories recording every call, for use-case tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::fixtures;
use crate::domain::entities::{
    Community, CommunityId, Party, PartyId, Player, PlayerId, Team, TeamId, User,
};
use crate::domain::repositories::{
    AuthGrant, AuthRepository, CommunityRepository, Credentials, NewParty, PartyRepository,
    PlayerRepository, Registration, RepositoryError, TeamRepository,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCommunities,
    GetCommunity(CommunityId),
    CreateCommunity(String),
    DeleteCommunity(CommunityId),
    CreatePlayer(String, CommunityId),
    DeletePlayer(PlayerId),
    CreateTeam(String, CommunityId),
    AddPlayers(TeamId, Vec<PlayerId>),
    ReplacePlayers(TeamId, String, Vec<PlayerId>),
    RenameTeam(TeamId, String),
    DeleteTeam(TeamId),
    ListParties,
    GetParty(PartyId),
    CreateParty(NewParty),
    EndParty(PartyId, Option<TeamId>),
    DeleteParty(PartyId),
    Login(String),
    Register(String),
    CurrentUser,
}

#[derive(Default)]
pub struct FakeStore {
    calls: Mutex<Vec<Call>>,
    pub communities: Mutex<Vec<Community>>,
    pub parties: Mutex<Vec<Party>>,
    failure: Mutex<Option<RepositoryError>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parties(parties: Vec<Party>) -> Self {
        let store = Self::default();
        *store.parties.lock().unwrap() = parties;
        store
    }

    pub fn with_communities(communities: Vec<Community>) -> Self {
        let store = Self::default();
        *store.communities.lock().unwrap() = communities;
        store
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&self, error: RepositoryError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn user(email: &str) -> User {
        User {
            id: 1,
            name: "Ana".into(),
            email: email.into(),
        }
    }
}

#[async_trait]
impl CommunityRepository for FakeStore {
    async fn find_all(&self) -> Result<Vec<Community>, RepositoryError> {
        self.record(Call::ListCommunities)?;
        Ok(self.communities.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: CommunityId) -> Result<Community, RepositoryError> {
        self.record(Call::GetCommunity(id))?;
        self.communities
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::status(404, "Community not found"))
    }

    async fn create(&self, name: &str) -> Result<Community, RepositoryError> {
        self.record(Call::CreateCommunity(name.to_string()))?;
        let mut community = fixtures::community(vec![], vec![]);
        community.name = name.to_string();
        Ok(community)
    }

    async fn delete(&self, id: CommunityId) -> Result<(), RepositoryError> {
        self.record(Call::DeleteCommunity(id))
    }
}

#[async_trait]
impl PlayerRepository for FakeStore {
    async fn create(
        &self,
        nickname: &str,
        community_id: CommunityId,
    ) -> Result<Player, RepositoryError> {
        self.record(Call::CreatePlayer(nickname.to_string(), community_id))?;
        Ok(fixtures::player(99, nickname))
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepositoryError> {
        self.record(Call::DeletePlayer(id))
    }
}

#[async_trait]
impl TeamRepository for FakeStore {
    async fn create(&self, name: &str, community_id: CommunityId) -> Result<Team, RepositoryError> {
        self.record(Call::CreateTeam(name.to_string(), community_id))?;
        Ok(fixtures::team(50, name, vec![]))
    }

    async fn add_players(
        &self,
        team_id: TeamId,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError> {
        self.record(Call::AddPlayers(team_id, player_ids.to_vec()))
    }

    async fn replace_players(
        &self,
        team_id: TeamId,
        name: &str,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError> {
        self.record(Call::ReplacePlayers(
            team_id,
            name.to_string(),
            player_ids.to_vec(),
        ))
    }

    async fn rename(&self, team_id: TeamId, name: &str) -> Result<(), RepositoryError> {
        self.record(Call::RenameTeam(team_id, name.to_string()))
    }

    async fn delete(&self, team_id: TeamId) -> Result<(), RepositoryError> {
        self.record(Call::DeleteTeam(team_id))
    }
}

#[async_trait]
impl PartyRepository for FakeStore {
    async fn find_all(&self) -> Result<Vec<Party>, RepositoryError> {
        self.record(Call::ListParties)?;
        Ok(self.parties.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: PartyId) -> Result<Party, RepositoryError> {
        self.record(Call::GetParty(id))?;
        self.parties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::status(404, "Party not found"))
    }

    async fn create(&self, party: &NewParty) -> Result<Party, RepositoryError> {
        self.record(Call::CreateParty(party.clone()))?;
        let mut created = fixtures::party(77, party.community_id, &party.team_ids);
        created.game_name = party.game_name.clone();
        Ok(created)
    }

    async fn end(
        &self,
        party_id: PartyId,
        team_winner_id: Option<TeamId>,
    ) -> Result<(), RepositoryError> {
        self.record(Call::EndParty(party_id, team_winner_id))
    }

    async fn delete(&self, id: PartyId) -> Result<(), RepositoryError> {
        self.record(Call::DeleteParty(id))
    }
}

#[async_trait]
impl AuthRepository for FakeStore {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, RepositoryError> {
        self.record(Call::Login(credentials.email.clone()))?;
        Ok(AuthGrant {
            token: "token-login".into(),
            user: Self::user(&credentials.email),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<AuthGrant, RepositoryError> {
        self.record(Call::Register(registration.email.clone()))?;
        Ok(AuthGrant {
            token: "token-register".into(),
            user: Self::user(&registration.email),
        })
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        self.record(Call::CurrentUser)?;
        Ok(Self::user("ana@example.com"))
    }
}
