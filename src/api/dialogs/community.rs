use crate::application::community::{CreateCommunity, DeleteCommunity};
use crate::domain::entities::{Community, CommunityId};
use crate::infrastructure::app_state::AppState;

use super::{refresh, DialogError, DialogState, Lifecycle};

/// Create a community, then reload the community list
pub struct CreateCommunityDialog {
    name: String,
    lifecycle: Lifecycle,
}

impl CreateCommunityDialog {
    pub fn open() -> Self {
        Self {
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

    pub async fn submit(&mut self, app: &AppState) -> Result<Vec<Community>, DialogError> {
        self.lifecycle.begin(app).await?;

        if let Err(e) = CreateCommunity::new(app.community_repo.clone())
            .execute(&self.name)
            .await
        {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Community created successfully");
        self.name.clear();
        refresh::communities(app).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
        if !self.lifecycle.is_editing() {
            self.name.clear();
        }
    }
}

impl Default for CreateCommunityDialog {
    fn default() -> Self {
        Self::open()
    }
}

/// Confirm deletion of a community; its contents are the backend's concern
pub struct DeleteCommunityDialog {
    community_id: CommunityId,
    lifecycle: Lifecycle,
}

impl DeleteCommunityDialog {
    pub fn open(community_id: CommunityId) -> Self {
        Self {
            community_id,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub async fn confirm(&mut self, app: &AppState) -> Result<Vec<Community>, DialogError> {
        self.lifecycle.begin(app).await?;

        if let Err(e) = DeleteCommunity::new(app.community_repo.clone())
            .execute(self.community_id)
            .await
        {
            return Err(self.lifecycle.fail(app, &e));
        }

        self.lifecycle.succeed(app, "Community deleted successfully");
        refresh::communities(app).await
    }

    pub fn close(&mut self) {
        self.lifecycle.close();
    }
}
