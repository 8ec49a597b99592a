use std::sync::Arc;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::repositories::RepositoryError;
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::rest::dto::{Envelope, MessageBody};
use crate::infrastructure::rest::Operation;
use crate::infrastructure::services::AuthSession;

/// Raw successful response
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Single-attempt HTTP client for the backend.
///
/// No retries and no timeout: a call either completes or fails once.
#[derive(Clone)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl RemoteStore {
    pub fn new(config: &ClientConfig, session: Arc<AuthSession>) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RepositoryError::unknown(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform the call and decode the `data` member of the success body.
    pub async fn request<T, B>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RepositoryError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.send(operation, method, path, body).await?;
        decode_data(operation, &raw.body)
    }

    /// Perform the call and discard the success body.
    pub async fn execute<B>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), RepositoryError>
    where
        B: Serialize + ?Sized,
    {
        self.send(operation, method, path, body).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<T, RepositoryError> {
        self.request(operation, Method::GET, path, None::<&()>).await
    }

    pub async fn delete(&self, operation: Operation, path: &str) -> Result<(), RepositoryError> {
        self.execute(operation, Method::DELETE, path, None::<&()>).await
    }

    /// Perform the call; non-2xx answers become errors carrying the body's
    /// `message`, or the operation's fallback message.
    pub async fn send<B>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, RepositoryError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} -> {} {}", operation.as_str(), method, url);

        let mut request = self.client.request(method, &url);
        if let Some(token) = self.session.token().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} failed in transit: {}", operation.as_str(), e);
            RepositoryError::transport(operation.fallback_message())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!("{} body could not be read: {}", operation.as_str(), e);
            RepositoryError::status(status.as_u16(), operation.fallback_message())
        })?;

        if !status.is_success() {
            let message = extract_message(&text)
                .unwrap_or_else(|| operation.fallback_message().to_string());
            warn!("{} rejected with {}: {}", operation.as_str(), status, message);
            return Err(RepositoryError::status(status.as_u16(), message));
        }

        debug!("{} <- {}", operation.as_str(), status);
        Ok(RawResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}

/// Pull a non-blank `message` out of an error body
pub fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Decode the `data` member of a success envelope
pub fn decode_data<T: DeserializeOwned>(
    operation: Operation,
    body: &str,
) -> Result<T, RepositoryError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| {
            warn!("{} returned an unreadable payload: {}", operation.as_str(), e);
            RepositoryError::unknown(format!("{}: unexpected response", operation.fallback_message()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Community;
    use crate::domain::repositories::ErrorKind;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message": "Team not found", "timestamp": "t"}"#).as_deref(),
            Some("Team not found")
        );
        assert_eq!(extract_message(r#"{"timestamp": "t"}"#), None);
        assert_eq!(extract_message(r#"{"message": "   "}"#), None);
        assert_eq!(extract_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_message(""), None);
    }

    #[test]
    fn test_decode_data_unwraps_envelope() {
        let body = r#"{
            "data": [{
                "id": 1,
                "name": "Friday Night",
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z",
                "players": [],
                "teams": []
            }],
            "timestamp": "2024-05-01T10:00:01Z"
        }"#;
        let communities: Vec<Community> = decode_data(Operation::ListCommunities, body).unwrap();
        assert_eq!(communities.len(), 1);
        assert_eq!(communities[0].name, "Friday Night");
    }

    #[test]
    fn test_decode_data_rejects_unexpected_shape() {
        let err = decode_data::<Vec<Community>>(Operation::ListCommunities, r#"{"items": []}"#)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert!(err.message.starts_with("Failed to fetch communities"));
    }
}
