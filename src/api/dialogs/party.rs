use crate::application::party::{
    CreateParty, CreatePartyInput, DeleteParty, EndParty, EndPartyInput, MIN_PARTY_TEAMS,
};
use crate::domain::entities::{CommunityId, Party, PartyId, Team, TeamId};
use crate::infrastructure::app_state::AppState;

use super::{refresh, DialogError, DialogState, Lifecycle, Selection};

/// Create a party from two or more of the community's teams
pub struct CreatePartyDialog {
    community_id: CommunityId,
    available_teams: Vec<Team>,
    game_name: String,
    selected_teams: Selection<TeamId>,
    lifecycle: Lifecycle,
}

impl CreatePartyDialog {
    pub fn open(community_id: CommunityId, available_teams: Vec<Team>) -> Self {
        Self {
            community_id,
            available_teams,
            game_name: String::new(),
            selected_teams: Selection::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn available_teams(&self) -> &[Team] {
        &self.available_teams
    }

    pub fn set_game_name(&mut self, game_name: impl Into<String>) {
        self.game_name = game_name.into();
    }

    /// Toggle a team; ids outside the community's teams are ignored
    pub fn toggle_team(&mut self, team_id: TeamId) -> bool {
        if !self.available_teams.iter().any(|t| t.id == team_id) {
            return false;
        }
        self.selected_teams.toggle(team_id);
        true
    }

    /// Pick a team; picking it again keeps it selected
    pub fn select_team(&mut self, team_id: TeamId) -> bool {
        if !self.available_teams.iter().any(|t| t.id == team_id) {
            return false;
        }
        self.selected_teams.select(team_id);
        true
    }

    pub fn selected_teams(&self) -> &[TeamId] {
        self.selected_teams.as_slice()
    }

    pub fn can_submit(&self) -> bool {
        self.lifecycle.is_editing() && self.selected_teams.len() >= MIN_PARTY_TEAMS
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    /// Create the party, then reload the community's parties
    pub async fn submit(&mut self, app: &AppState) -> Result<Vec<Party>, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = CreateParty::new(app.party_repo.clone())
            .execute(CreatePartyInput {
                game_name: self.game_name.clone(),
                team_ids: self.selected_teams.as_slice().to_vec(),
                community_id: self.community_id,
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Party created successfully");
        self.reset();
        refresh::parties(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.game_name.clear();
        self.selected_teams.clear();
    }
}

/// End an active party, optionally declaring a winner
pub struct EndPartyDialog {
    party: Party,
    winner: Option<TeamId>,
    lifecycle: Lifecycle,
}

impl EndPartyDialog {
    pub fn open(party: Party) -> Self {
        Self {
            party,
            winner: None,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Pick the winning team, or `None` for no winner / draw.
    /// Teams outside the party are refused.
    pub fn select_winner(&mut self, team_id: Option<TeamId>) -> bool {
        match team_id {
            Some(id) if !self.party.has_team(id) => false,
            _ => {
                self.winner = team_id;
                true
            }
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Vec<Party>, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = EndParty::new(app.party_repo.clone())
            .execute(EndPartyInput {
                party: self.party.clone(),
                team_winner_id: self.winner,
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Party ended successfully");
        self.winner = None;
        refresh::parties(app, self.party.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.winner = None;
        }
    }
}

/// Confirm deletion of a party, in any state
pub struct DeletePartyDialog {
    party_id: PartyId,
    community_id: CommunityId,
    lifecycle: Lifecycle,
}

impl DeletePartyDialog {
    pub fn open(party_id: PartyId, community_id: CommunityId) -> Self {
        Self {
            party_id,
            community_id,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn confirm(&mut self, app: &AppState) -> Result<Vec<Party>, DialogError> {
        self.lifecycle.begin(app).await?;

        if let Err(e) = DeleteParty::new(app.party_repo.clone())
            .execute(self.party_id)
            .await
        {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Party deleted successfully");
        refresh::parties(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
    }
}
