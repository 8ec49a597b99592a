use crate::application::player::{CreatePlayer, CreatePlayerInput, DeletePlayer};
use crate::domain::entities::{Community, CommunityId, PlayerId};
use crate::infrastructure::app_state::AppState;

use super::{refresh, DialogError, DialogState, Lifecycle};

/// Add a player to a community
pub struct CreatePlayerDialog {
    community_id: CommunityId,
    nickname: String,
    lifecycle: Lifecycle,
}

impl CreatePlayerDialog {
    pub fn open(community_id: CommunityId) -> Self {
        Self {
            community_id,
            nickname: String::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn submit(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        let result = CreatePlayer::new(app.player_repo.clone())
            .execute(CreatePlayerInput {
                nickname: self.nickname.clone(),
                community_id: self.community_id,
            })
            .await;
        if let Err(e) = result {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Player added successfully!");
        self.nickname.clear();
        refresh::community(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.nickname.clear();
        }
    }
}

/// Confirm deletion of a player
pub struct DeletePlayerDialog {
    community_id: CommunityId,
    player_id: PlayerId,
    lifecycle: Lifecycle,
}

impl DeletePlayerDialog {
    pub fn open(community_id: CommunityId, player_id: PlayerId) -> Self {
        Self {
            community_id,
            player_id,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn confirm(&mut self, app: &AppState) -> Result<Community, DialogError> {
        self.lifecycle.begin(app).await?;

        if let Err(e) = DeletePlayer::new(app.player_repo.clone())
            .execute(self.player_id)
            .await
        {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Player deleted successfully");
        refresh::community(app, self.community_id).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
    }
}
