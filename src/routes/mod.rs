// src/routes/mod.rs
pub mod chat;

use std::time::Duration;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Full application: routes, state and the origin allow-list.
pub fn create_app(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    create_router().with_state(state).layer(cors)
}

/// Exact-match origin allow-list. Credentials stay disabled.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            // AllowOrigin::list panics on "*".
            let wildcard = origin.as_str() == "*";
            if wildcard {
                warn!("ignoring wildcard CORS origin");
            }
            !wildcard
        })
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600))
}
