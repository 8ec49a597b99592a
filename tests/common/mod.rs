//! In-process fake backend for integration tests
//!
//! Every request is recorded; responses are canned per `METHOD /path`.
//! Unknown routes answer 404 `{ "message": "Not found" }`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};

use community_hub::infrastructure::app_state::AppState;
use community_hub::infrastructure::config::ClientConfig;

pub const STAMP: &str = "2024-03-01T20:00:00Z";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Value,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<String, (StatusCode, Value)>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Inner>>;

pub struct FakeBackend {
    pub base_url: String,
    inner: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let inner: Shared = Arc::new(Mutex::new(Inner::default()));
        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            inner,
        }
    }

    /// Answer `method path` with `status` and `body`
    pub fn on(&self, method: &str, path: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert(format!("{} {}", method, path), (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Recorded requests matching `method path`
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// App state pointed at this backend, signed in with `token`
    pub fn app(&self, token: Option<&str>) -> AppState {
        let config =
            ClientConfig::new(self.base_url.clone()).with_token(token.map(|t| t.to_string()));
        AppState::new(config).unwrap()
    }
}

async fn handle(
    State(inner): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let mut inner = inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        body,
        authorization,
    });

    match inner.routes.get(&format!("{} {}", method, uri.path())) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response(),
    }
}

pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "timestamp": STAMP })
}

pub fn player_json(id: i64, nickname: &str) -> Value {
    json!({
        "id": id,
        "nickname": nickname,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn team_json(id: i64, name: &str, players: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "players": players,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn community_json(id: i64, name: &str, players: Vec<Value>, teams: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "players": players,
        "teams": teams,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn party_json(id: i64, community_id: i64, game_name: &str, teams: Vec<Value>) -> Value {
    json!({
        "id": id,
        "community_id": community_id,
        "game_name": game_name,
        "teams": teams,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}
