//! Shared application state

use std::sync::Arc;

use crate::application::CreatureFacade;
use crate::domain::services::{CreatureService, Creatures};
use crate::infrastructure::config::{AppConfig, StoreBackend};
use crate::infrastructure::persistence::{
    CreatureRepository, InMemoryCreatureRepository, JsonFileCreatureRepository, PersistedCreatures,
};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub creature_service: CreatureService,
    pub creature_facade: CreatureFacade,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let repository: Arc<dyn CreatureRepository> = match &config.store {
            StoreBackend::Memory => Arc::new(InMemoryCreatureRepository::new()),
            StoreBackend::JsonFile(path) => Arc::new(JsonFileCreatureRepository::new(path)),
        };
        tracing::debug!(store = ?config.store, "Creature repository initialized");

        let creatures: Arc<dyn Creatures> = Arc::new(PersistedCreatures::new(repository));
        let creature_service = CreatureService::new(creatures);
        let creature_facade = CreatureFacade::new(creature_service.clone());

        Self {
            config,
            creature_service,
            creature_facade,
        }
    }
}
