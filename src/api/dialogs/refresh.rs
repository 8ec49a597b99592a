//! Full re-fetch of an aggregate after a successful mutation

use crate::application::community::{GetCommunity, ListCommunities};
use crate::application::party::ListCommunityParties;
use crate::domain::entities::{Community, CommunityId, Party};
use crate::infrastructure::app_state::{AppState, Notification};

use super::DialogError;

pub(super) async fn communities(app: &AppState) -> Result<Vec<Community>, DialogError> {
    ListCommunities::new(app.community_repo.clone())
        .execute()
        .await
        .map_err(|e| report(app, &e))
}

pub(super) async fn community(
    app: &AppState,
    community_id: CommunityId,
) -> Result<Community, DialogError> {
    GetCommunity::new(app.community_repo.clone())
        .execute(community_id)
        .await
        .map_err(|e| report(app, &e))
}

pub(super) async fn parties(
    app: &AppState,
    community_id: CommunityId,
) -> Result<Vec<Party>, DialogError> {
    ListCommunityParties::new(app.party_repo.clone())
        .execute(community_id)
        .await
        .map_err(|e| report(app, &e))
}

fn report<E: crate::application::UseCaseError>(app: &AppState, error: &E) -> DialogError {
    tracing::warn!("Refresh failed: {}", error);
    app.notify(Notification::error(error.to_string()));
    DialogError::from_use_case(error)
}
