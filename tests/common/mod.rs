#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
    response::Response,
    routing::post,
};
use benbot_relay::{config::Config, routes::create_app, state::AppState};
use serde_json::Value;
use tokio::{net::TcpListener, sync::Mutex};

pub const UPSTREAM_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub body: Value,
}

/// Stand-in for the chat-completion provider. Replies with a fixed status and
/// body and keeps every payload it receives.
pub struct MockUpstream {
    pub url: String,
    received: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub async fn spawn(status: StatusCode, body: impl Into<String>) -> Self {
        Self::spawn_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn spawn_with_delay(status: StatusCode, body: impl Into<String>, delay: Duration) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let recorder = received.clone();
        let body = body.into();

        let app = Router::new().route(
            UPSTREAM_PATH,
            post(move |headers: HeaderMap, Json(payload): Json<Value>| {
                let recorder = recorder.clone();
                let body = body.clone();
                async move {
                    recorder.lock().await.push(Captured {
                        authorization: headers
                            .get(header::AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                        body: payload,
                    });
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url: format!("http://{addr}{UPSTREAM_PATH}"), received }
    }

    pub async fn received(&self) -> Vec<Captured> {
        self.received.lock().await.clone()
    }
}

/// URL of a port that was just released, so connecting to it fails.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{UPSTREAM_PATH}")
}

pub fn test_app(api_key: Option<&str>, api_url: &str) -> Router {
    test_app_with(Config {
        api_key: api_key.map(str::to_string),
        api_url: api_url.to_string(),
        ..Config::default()
    })
}

pub fn test_app_with(config: Config) -> Router {
    create_app(Arc::new(AppState::new(config).unwrap()))
}

pub fn chat_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
