pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod telemetry;

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tracing::info;

use crate::api::routes;
use crate::config::Config;
use crate::domain::{RandomSource, SeededRandom, ThreadRandom};
use crate::store::BusinessStore;

#[derive(Clone)]
pub struct AppState {
    pub store: BusinessStore,
    pub random: Arc<dyn RandomSource>,
    pub config: Config,
}

pub struct App {
    state: Arc<AppState>,
}

impl App {
    pub fn store(&self) -> &BusinessStore {
        &self.state.store
    }

    pub async fn new(config: Config) -> Result<Self> {
        let random: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => {
                info!(seed, "using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        Self::with_random(config, random).await
    }

    pub async fn with_random(config: Config, random: Arc<dyn RandomSource>) -> Result<Self> {
        let store = BusinessStore::connect(&config).await?;

        let state = Arc::new(AppState {
            store,
            random,
            config,
        });

        Ok(Self { state })
    }

    pub fn router(&self) -> Router {
        routes::build(self.state.clone())
    }
}
