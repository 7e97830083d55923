//! Unparsable EVOCHAIN_* values (own process: mutates process environment)

use std::fs;

use tempfile::TempDir;

use evochain::application::ApplicationError;
use evochain::config::Settings;

#[test]
fn given_unparsable_env_values_when_loading_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evochain.toml");
    fs::write(&path, "").unwrap();

    std::env::set_var("EVOCHAIN_TIMEOUT_SECS", "thirty");
    let timeout = Settings::load(Some(&path));
    std::env::remove_var("EVOCHAIN_TIMEOUT_SECS");

    std::env::set_var("EVOCHAIN_FETCH_CARDS", "sometimes");
    let fetch_cards = Settings::load(Some(&path));
    std::env::remove_var("EVOCHAIN_FETCH_CARDS");

    match timeout {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("EVOCHAIN_TIMEOUT_SECS"), "{}", message)
        }
        other => panic!("expected config error, got {:?}", other),
    }
    match fetch_cards {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("EVOCHAIN_FETCH_CARDS"), "{}", message)
        }
        other => panic!("expected config error, got {:?}", other),
    }

    let settings = Settings::load(Some(&path)).expect("unset variables fall back to defaults");
    assert_eq!(settings.timeout_secs, 10);
}
