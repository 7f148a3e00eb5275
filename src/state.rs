// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::deepseek::DeepSeekClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub client: DeepSeekClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = DeepSeekClient::new(config.api_url.clone(), config.request_timeout)?;
        Ok(Self { config, client })
    }
}
