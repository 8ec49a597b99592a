use crate::application::team::{
    AddPlayersToTeam, AddPlayersToTeamInput, CreateTeam, CreateTeamInput,
    RemovePlayersFromTeam, RemovePlayersFromTeamInput, RenameTeam, RenameTeamInput,
};
use crate::domain::entities::{Community, CommunityId, Player, PlayerId, Team};
use crate::infrastructure::app_state::AppState;

use super::{refresh, DialogError, DialogState, Lifecycle, Selection};

/// Create an empty team in a community
pub struct CreateTeamDialog {
    community_id: CommunityId,
    name: String,
    lifecycle: Lifecycle,
}

impl CreateTeamDialog {
    pub fn open(community_id: CommunityId) -> Self {
        Self {
            community_id,
            name: String::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = CreateTeam::new(app.team_repo.clone())
            .execute(CreateTeamInput {
                name: self.name.clone(),
                community_id: self.community_id,
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Team created successfully");
        self.name.clear();
        refresh::community(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.name.clear();
        }
    }
}

/// Rename a team
pub struct RenameTeamDialog {
    community_id: CommunityId,
    team: Team,
    name: String,
    lifecycle: Lifecycle,
}

impl RenameTeamDialog {
    pub fn open(community_id: CommunityId, team: Team) -> Self {
        let name = team.name.clone();
        Self {
            community_id,
            team,
            name,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = RenameTeam::new(app.team_repo.clone())
            .execute(RenameTeamInput {
                team_id: self.team.id,
                name: self.name.clone(),
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Team updated successfully");
        self.team.name = self.name.clone();
        refresh::community(app, self.community_id).await
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dismiss; the name goes back to the team's current one
    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.name = self.team.name.clone();
        }
    }
}

/// Add community players that are not yet on the team
pub struct AddPlayersToTeamDialog {
    community_id: CommunityId,
    team: Team,
    candidates: Vec<Player>,
    selected: Selection<PlayerId>,
    lifecycle: Lifecycle,
}

impl AddPlayersToTeamDialog {
    /// Candidates are the community's players minus the team's roster
    pub fn open(community: &Community, team: Team) -> Self {
        Self {
            community_id: community.id,
            candidates: community.candidate_players(&team),
            team,
            selected: Selection::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn candidates(&self) -> &[Player] {
        &self.candidates
    }

    /// Toggle a candidate; players already on the team are ignored
    pub fn toggle_player(&mut self, player_id: PlayerId) -> bool {
        if !self.candidates.iter().any(|p| p.id == player_id) {
            return false;
        }
        self.selected.toggle(player_id);
        true
    }

    /// Pick a candidate; picking it again keeps it selected
    pub fn select_player(&mut self, player_id: PlayerId) -> bool {
        if !self.candidates.iter().any(|p| p.id == player_id) {
            return false;
        }
        self.selected.select(player_id);
        true
    }

    pub fn selected(&self) -> &[PlayerId] {
        self.selected.as_slice()
    }

    pub fn can_submit(&self) -> bool {
        self.lifecycle.is_editing() && !self.selected.is_empty()
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = AddPlayersToTeam::new(app.team_repo.clone())
            .execute(AddPlayersToTeamInput {
                team_id: self.team.id,
                player_ids: self.selected.as_slice().to_vec(),
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Players added to team successfully");
        self.selected.clear();
        refresh::community(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.selected.clear();
        }
    }
}

/// Take players off a team by resubmitting the rest of the roster
pub struct RemovePlayersFromTeamDialog {
    community_id: CommunityId,
    team: Team,
    selected: Selection<PlayerId>,
    lifecycle: Lifecycle,
}

impl RemovePlayersFromTeamDialog {
    pub fn open(community_id: CommunityId, team: Team) -> Self {
        Self {
            community_id,
            team,
            selected: Selection::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn toggle_player(&mut self, player_id: PlayerId) -> bool {
        if !self.team.has_player(player_id) {
            return false;
        }
        self.selected.toggle(player_id);
        true
    }

    pub fn select_player(&mut self, player_id: PlayerId) -> bool {
        if !self.team.has_player(player_id) {
            return false;
        }
        self.selected.select(player_id);
        true
    }

    pub fn selected(&self) -> &[PlayerId] {
        self.selected.as_slice()
    }

    pub fn can_submit(&self) -> bool {
        self.lifecycle.is_editing() && !self.selected.is_empty()
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = RemovePlayersFromTeam::new(app.team_repo.clone())
            .execute(RemovePlayersFromTeamInput {
                team: self.team.clone(),
                player_ids: self.selected.as_slice().to_vec(),
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Team updated successfully");
        self.selected.clear();
        refresh::community(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.selected.clear();
        }
    }
}
