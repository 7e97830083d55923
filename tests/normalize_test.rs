//! Tests for species name normalization

use rstest::rstest;

use evochain::domain::{normalize_species_name, DomainError};

#[rstest]
#[case("Pikachu", "pikachu")]
#[case("  bulbasaur\n", "bulbasaur")]
#[case("Mr. Mime", "mr-mime")]
#[case("mr    mime", "mr-mime")]
#[case("Farfetch'd", "farfetchd")]
#[case("Ho-Oh", "ho-oh")]
#[case("Type: Null", "type-null")]
#[case("Porygon2", "porygon2")]
#[case("Tapu\tKoko", "tapu-koko")]
fn given_free_text_when_normalizing_then_returns_provider_identifier(
    #[case] raw: &str,
    #[case] expected: &str,
) {
    let id = normalize_species_name(raw).unwrap();
    assert_eq!(id.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("?!.")]
#[case(" - ")]
fn given_text_without_name_characters_when_normalizing_then_fails(#[case] raw: &str) {
    let result = normalize_species_name(raw);

    assert_eq!(
        result,
        Err(DomainError::EmptySpeciesName {
            raw: raw.to_string()
        })
    );
}

#[test]
fn given_normalized_name_when_normalizing_again_then_unchanged() {
    let once = normalize_species_name("Mr. Mime Jr.").unwrap();
    let twice = normalize_species_name(once.as_str()).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.as_str(), "mr-mime-jr");
}
