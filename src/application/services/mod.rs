//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (SpeciesProvider)
//! but are themselves concrete structs, not traits.

mod evolution;

pub use evolution::{ChainLookup, EvolutionService, QueryCanceller, QueryTicket};
