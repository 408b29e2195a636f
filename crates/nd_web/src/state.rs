use std::sync::Arc;

use nd_core::{AppConfig, HeadlineProvider};

pub struct AppState {
    pub provider: Arc<dyn HeadlineProvider>,
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(provider: Arc<dyn HeadlineProvider>, config: AppConfig) -> Self {
        Self {
            provider,
            config,
            http: reqwest::Client::new(),
        }
    }
}
