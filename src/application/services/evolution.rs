//! Evolution lookup service
//!
//! Turns a free-text species name into flattened evolution stages and,
//! optionally, one display card per species.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    flatten, normalize_species_name, EvolutionGallery, EvolutionNode, EvolutionStages,
    SpeciesCard, SpeciesId,
};
use crate::infrastructure::traits::SpeciesProvider;

/// Result of resolving a query down to its evolution chain.
#[derive(Debug, Clone)]
pub struct ChainLookup {
    pub query: SpeciesId,
    pub chain: EvolutionNode,
    pub stages: EvolutionStages,
}

/// Handle for one submitted query.
///
/// A ticket stays current until a newer query starts or pending queries are cancelled.
#[derive(Debug)]
pub struct QueryTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl QueryTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

/// Cancels in-flight queries of the service it was taken from.
#[derive(Debug, Clone)]
pub struct QueryCanceller {
    generation: Arc<AtomicU64>,
}

impl QueryCanceller {
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Service for looking up evolution chains.
pub struct EvolutionService {
    provider: Arc<dyn SpeciesProvider>,
    fetch_cards: bool,
    generation: Arc<AtomicU64>,
}

impl EvolutionService {
    /// Create a new evolution service.
    ///
    /// With `fetch_cards` disabled, cards carry only the species name.
    pub fn new(provider: Arc<dyn SpeciesProvider>, fetch_cards: bool) -> Self {
        Self {
            provider,
            fetch_cards,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new query, superseding all earlier ones.
    pub fn begin_query(&self) -> QueryTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Supersede every query in flight.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn canceller(&self) -> QueryCanceller {
        QueryCanceller {
            generation: Arc::clone(&self.generation),
        }
    }

    /// Resolve a raw name to its flattened evolution chain.
    pub fn lookup_stages(&self, raw: &str) -> ApplicationResult<ChainLookup> {
        let ticket = self.begin_query();
        self.lookup_stages_with(&ticket, raw)
    }

    /// Resolve a raw name to the full card gallery.
    pub fn submit_query(&self, raw: &str) -> ApplicationResult<EvolutionGallery> {
        let ticket = self.begin_query();
        self.submit_query_with(&ticket, raw)
    }

    /// Like [`lookup_stages`](Self::lookup_stages) under an existing ticket.
    #[instrument(level = "debug", skip(self, ticket), fields(ticket = ticket.id()))]
    pub fn lookup_stages_with(&self, ticket: &QueryTicket, raw: &str) -> ApplicationResult<ChainLookup> {
        let query = normalize_species_name(raw)?;
        debug!("lookup_stages: query={}", query);

        let species = self.provider.species(query.as_str())?;
        ensure_current(ticket, &query)?;

        let chain = self.provider.evolution_chain(&species.evolution_chain_url)?;
        ensure_current(ticket, &query)?;

        let stages = flatten(&chain);
        debug!(
            "lookup_stages: {} stages, {} species",
            stages.len(),
            stages.species_count()
        );

        Ok(ChainLookup {
            query,
            chain,
            stages,
        })
    }

    /// Like [`submit_query`](Self::submit_query) under an existing ticket.
    #[instrument(level = "debug", skip(self, ticket), fields(ticket = ticket.id()))]
    pub fn submit_query_with(
        &self,
        ticket: &QueryTicket,
        raw: &str,
    ) -> ApplicationResult<EvolutionGallery> {
        let lookup = self.lookup_stages_with(ticket, raw)?;

        let mut stages = Vec::with_capacity(lookup.stages.len());
        for stage in &lookup.stages {
            let mut cards = Vec::with_capacity(stage.len());
            for name in stage {
                let card = if self.fetch_cards {
                    self.species_card(name)?
                } else {
                    SpeciesCard {
                        name: name.clone(),
                        artwork_url: None,
                        types: Vec::new(),
                    }
                };
                ensure_current(ticket, &lookup.query)?;
                cards.push(card);
            }
            stages.push(cards);
        }

        let gallery = EvolutionGallery {
            query: lookup.query.to_string(),
            stages,
        };
        info!(
            "{}: {} stages, {} cards",
            gallery.query,
            gallery.stages.len(),
            gallery.card_count()
        );
        Ok(gallery)
    }

    /// Display attributes for one species.
    ///
    /// Species whose name is not a pokemon name (e.g. `deoxys`) are resolved
    /// through their default variety. The card keeps the species name.
    pub fn species_card(&self, species_name: &str) -> ApplicationResult<SpeciesCard> {
        match self.provider.pokemon(species_name) {
            Ok(card) => Ok(card),
            Err(e) if e.is_not_found() => {
                debug!("species_card: {} not a pokemon, trying default variety", species_name);
                let species = self.provider.species(species_name)?;
                match species.default_variety {
                    Some(variety) if variety != species_name => {
                        let mut card = self.provider.pokemon(&variety)?;
                        card.name = species_name.to_string();
                        Ok(card)
                    }
                    _ => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn ensure_current(ticket: &QueryTicket, query: &SpeciesId) -> ApplicationResult<()> {
    if ticket.is_current() {
        Ok(())
    } else {
        debug!("query {} superseded (ticket {})", query, ticket.id());
        Err(ApplicationError::Cancelled {
            query: query.to_string(),
        })
    }
}
