//! Domain layer: entities and pure logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod palette;

pub use entities::*;
pub use error::DomainError;
pub use flatten::flatten;
pub use normalize::normalize_species_name;
