pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod rules;
pub mod services;
pub mod state;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benbot_relay=info,tower_http=info".into()),
        )
        .init();
}
