use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::{Party, PartyId, TeamId};
use crate::domain::repositories::{NewParty, PartyRepository, RepositoryError};
use crate::infrastructure::rest::dto::{CreatePartyRequest, EndPartyRequest, Envelope, MessageBody};
use crate::infrastructure::rest::{Operation, RemoteStore};

/// Marker the backend uses instead of an empty list
const NO_PARTIES_FOUND: &str = "No parties found";

/// REST implementation of PartyRepository
pub struct HttpPartyRepository {
    store: RemoteStore,
}

impl HttpPartyRepository {
    pub fn new(store: RemoteStore) -> Self {
        Self { store }
    }
}

/// Map the bulk listing body to parties; "no parties found" means empty.
///
/// A body carrying `data` is a listing and must decode as one; anything else
/// is read as a bare message.
pub fn parse_party_list(body: &str) -> Result<Vec<Party>, RepositoryError> {
    let unexpected = |e: serde_json::Error| {
        warn!("{} returned an unreadable payload: {}", Operation::ListParties.as_str(), e);
        RepositoryError::unknown(format!(
            "{}: unexpected response ({})",
            Operation::ListParties.fallback_message(),
            e
        ))
    };

    let value: Value = serde_json::from_str(body).map_err(unexpected)?;
    if value.get("data").is_some() {
        let envelope: Envelope<Vec<Party>> = serde_json::from_value(value).map_err(unexpected)?;
        return Ok(envelope.data);
    }

    let body: MessageBody = serde_json::from_value(value).map_err(unexpected)?;
    match body.message {
        Some(message) if message.contains(NO_PARTIES_FOUND) => Ok(Vec::new()),
        Some(message) => Err(RepositoryError::unknown(message)),
        None => Err(RepositoryError::unknown(format!(
            "{}: unexpected response",
            Operation::ListParties.fallback_message()
        ))),
    }
}

#[async_trait]
impl PartyRepository for HttpPartyRepository {
    async fn find_all(&self) -> Result<Vec<Party>, RepositoryError> {
        let result = self
            .store
            .send(Operation::ListParties, Method::GET, "/parties", None::<&()>)
            .await;

        match result {
            Ok(raw) => parse_party_list(&raw.body),
            // Some backends answer an error status for the empty case
            Err(e) if e.status.is_some() && e.message.contains(NO_PARTIES_FOUND) => {
                debug!("No parties found (status {:?})", e.status);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn find_by_id(&self, id: PartyId) -> Result<Party, RepositoryError> {
        self.store
            .get(Operation::GetParty, &format!("/parties/{}", id))
            .await
    }

    async fn create(&self, party: &NewParty) -> Result<Party, RepositoryError> {
        self.store
            .request(
                Operation::CreateParty,
                Method::POST,
                "/parties",
                Some(&CreatePartyRequest {
                    game_name: &party.game_name,
                    teams_ids: &party.team_ids,
                    community_id: party.community_id,
                }),
            )
            .await
    }

    async fn end(
        &self,
        party_id: PartyId,
        team_winner_id: Option<TeamId>,
    ) -> Result<(), RepositoryError> {
        self.store
            .execute(
                Operation::EndParty,
                Method::PATCH,
                "/parties/end",
                Some(&EndPartyRequest {
                    party_id,
                    team_winner_id,
                }),
            )
            .await
    }

    async fn delete(&self, id: PartyId) -> Result<(), RepositoryError> {
        self.store
            .delete(Operation::DeleteParty, &format!("/parties/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ErrorKind;

    #[test]
    fn test_no_parties_message_is_empty_list() {
        let parties = parse_party_list(
            r#"{"message": "No parties found for this query", "timestamp": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(parties.is_empty());
    }

    #[test]
    fn test_empty_array_is_empty_list() {
        let parties =
            parse_party_list(r#"{"data": [], "timestamp": "2024-05-01T10:00:00Z"}"#).unwrap();
        assert!(parties.is_empty());
    }

    #[test]
    fn test_listed_parties_keep_order() {
        let body = r#"{"data": [
            {"id": 2, "community_id": 5, "game_name": "Chess",
             "created_at": "2024-05-01T10:00:00Z", "updated_at": "2024-05-01T10:00:00Z", "teams": []},
            {"id": 1, "community_id": 6, "game_name": "Go",
             "created_at": "2024-05-01T10:00:00Z", "updated_at": "2024-05-01T10:00:00Z", "teams": []}
        ], "timestamp": "2024-05-01T10:00:01Z"}"#;
        let ids: Vec<_> = parse_party_list(body).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_other_message_is_an_error() {
        let err = parse_party_list(r#"{"message": "Database offline"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.message, "Database offline");
    }

    #[test]
    fn test_malformed_party_keeps_decode_error() {
        let body = r#"{"data": [
            {"id": 2, "community_id": 5, "game_name": "Chess",
             "created_at": "2024-05-01T10:00:00Z", "updated_at": "2024-05-01T10:00:00Z"},
            {"id": "three", "community_id": 5, "game_name": "Go",
             "created_at": "2024-05-01T10:00:00Z", "updated_at": "2024-05-01T10:00:00Z"}
        ]}"#;
        let err = parse_party_list(body).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert!(err.message.starts_with("Failed to fetch parties: unexpected response ("));
        assert!(err.message.contains("invalid type"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = parse_party_list("not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
    }
}
