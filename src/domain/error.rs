//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the pure logic.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("species name is empty after normalization: {raw:?}")]
    EmptySpeciesName { raw: String },
}
