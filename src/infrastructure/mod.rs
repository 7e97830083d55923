//! Infrastructure layer: provider implementation and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod pokeapi;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use pokeapi::PokeApiClient;
pub use traits::{ProviderError, ProviderResult, SpeciesProvider, SpeciesRecord};
