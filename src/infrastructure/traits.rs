//! I/O boundary traits for testability
//!
//! The species-data provider is abstracted so services can be tested with
//! in-memory implementations instead of the network.

use thiserror::Error;

use crate::domain::{EvolutionNode, SpeciesCard};

/// Failures at the provider boundary.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from {url}: {message}")]
    Malformed { url: String, message: String },
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Species metadata needed to continue the lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRecord {
    pub name: String,
    /// Resource reference of the evolution chain this species belongs to
    pub evolution_chain_url: String,
    /// Pokemon name of the default variety, when it differs from the species
    pub default_variety: Option<String>,
}

/// Species-data provider abstraction.
pub trait SpeciesProvider: Send + Sync {
    /// Look up species metadata by normalized identifier.
    fn species(&self, id: &str) -> ProviderResult<SpeciesRecord>;

    /// Fetch the evolution tree behind a chain reference.
    fn evolution_chain(&self, url: &str) -> ProviderResult<EvolutionNode>;

    /// Fetch display attributes (artwork, categories) for one pokemon.
    fn pokemon(&self, name: &str) -> ProviderResult<SpeciesCard>;
}
