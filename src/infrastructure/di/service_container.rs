//! Service container for dependency injection
//!
//! Wires up the provider and services from settings.

use std::sync::Arc;

use crate::application::services::EvolutionService;
use crate::application::ApplicationError;
use crate::config::Settings;
use crate::infrastructure::pokeapi::PokeApiClient;
use crate::infrastructure::traits::SpeciesProvider;
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Species-data provider
    pub provider: Arc<dyn SpeciesProvider>,

    pub evolution: EvolutionService,
}

impl ServiceContainer {
    /// Create a new service container talking to the configured endpoint.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let client = PokeApiClient::new(&settings).map_err(ApplicationError::from)?;
        Ok(Self::with_deps(settings, Arc::new(client)))
    }

    /// Create a service container with a custom provider (for testing).
    pub fn with_deps(settings: Settings, provider: Arc<dyn SpeciesProvider>) -> Self {
        let settings = Arc::new(settings);
        let evolution = EvolutionService::new(provider.clone(), settings.fetch_cards);

        Self {
            settings,
            provider,
            evolution,
        }
    }
}
