//! Test support: one-time logging setup and an in-memory species provider

use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{EvolutionNode, SpeciesCard};
use crate::infrastructure::traits::{
    ProviderError, ProviderResult, SpeciesProvider, SpeciesRecord,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "evochain=trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Species provider backed by maps, records every call.
///
/// Each chain is registered under its root; every species of the chain
/// resolves to it. Cards are registered per pokemon name.
#[derive(Default)]
pub struct InMemoryProvider {
    species: HashMap<String, SpeciesRecord>,
    chains: HashMap<String, EvolutionNode>,
    cards: HashMap<String, SpeciesCard>,
    calls: Mutex<Vec<String>>,
    hooks: Mutex<Vec<(String, Box<dyn Fn() + Send>)>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chain; all its species point to it.
    pub fn with_chain(mut self, root: EvolutionNode) -> Self {
        let url = format!("memory://evolution-chain/{}", root.species_name);
        let mut pending = vec![&root];
        while let Some(node) = pending.pop() {
            self.species.insert(
                node.species_name.clone(),
                SpeciesRecord {
                    name: node.species_name.clone(),
                    evolution_chain_url: url.clone(),
                    default_variety: None,
                },
            );
            pending.extend(node.children.iter());
        }
        self.chains.insert(url, root);
        self
    }

    /// Register a card under its own name.
    pub fn with_card(mut self, card: SpeciesCard) -> Self {
        self.cards.insert(card.name.clone(), card);
        self
    }

    /// Set the default variety of an already registered species.
    pub fn with_default_variety(mut self, species: &str, variety: &str) -> Self {
        if let Some(record) = self.species.get_mut(species) {
            record.default_variety = Some(variety.to_string());
        }
        self
    }

    /// Run `hook` whenever a call is recorded whose label starts with `prefix`.
    pub fn on_call(self, prefix: &str, hook: impl Fn() + Send + 'static) -> Self {
        if let Ok(mut hooks) = self.hooks.lock() {
            hooks.push((prefix.to_string(), Box::new(hook)));
        }
        self
    }

    /// Calls in order, formatted as `kind:argument`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, label: String) {
        if let Ok(hooks) = self.hooks.lock() {
            for (prefix, hook) in hooks.iter() {
                if label.starts_with(prefix.as_str()) {
                    hook();
                }
            }
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(label);
        }
    }
}

impl SpeciesProvider for InMemoryProvider {
    fn species(&self, id: &str) -> ProviderResult<SpeciesRecord> {
        self.record(format!("species:{}", id));
        self.species
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    fn evolution_chain(&self, url: &str) -> ProviderResult<EvolutionNode> {
        self.record(format!("chain:{}", url));
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(url.to_string()))
    }

    fn pokemon(&self, name: &str) -> ProviderResult<SpeciesCard> {
        self.record(format!("pokemon:{}", name));
        self.cards
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(name.to_string()))
    }
}
