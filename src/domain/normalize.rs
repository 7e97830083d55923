//! Best-effort conversion of free text into a provider species identifier
//!
//! Lowercases, drops punctuation other than `-` and joins words with `-`.
//! Some names still won't match the provider (e.g. gender symbols).

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::SpeciesId;
use crate::domain::error::DomainError;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s-]").expect("valid punctuation regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize raw user input, e.g. `"  Mr. Mime "` becomes `mr-mime`.
pub fn normalize_species_name(raw: &str) -> Result<SpeciesId, DomainError> {
    let lowered = raw.trim().to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    let joined = WHITESPACE.replace_all(stripped.trim(), "-");
    let id = joined.trim_matches('-');

    if id.is_empty() {
        return Err(DomainError::EmptySpeciesName {
            raw: raw.to_string(),
        });
    }
    Ok(SpeciesId::new_unchecked(id.to_string()))
}
