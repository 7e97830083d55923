//! PokeAPI implementation of the species-data provider

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::{EvolutionNode, SpeciesCard};
use crate::infrastructure::traits::{
    ProviderError, ProviderResult, SpeciesProvider, SpeciesRecord,
};

/// Blocking HTTP client for a PokeAPI compatible endpoint.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client from settings (base URL, timeout, user agent).
    pub fn new(settings: &Settings) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn species_url(&self, id: &str) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> ProviderResult<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        check_status(url, what, response.status())?;

        let body = response.text()?;
        decode(url, &body)
    }
}

impl SpeciesProvider for PokeApiClient {
    #[instrument(level = "debug", skip(self))]
    fn species(&self, id: &str) -> ProviderResult<SpeciesRecord> {
        let url = self.species_url(id);
        let dto: SpeciesDto = self.get_json(&url, id)?;
        dto.into_record(&url)
    }

    #[instrument(level = "debug", skip(self))]
    fn evolution_chain(&self, url: &str) -> ProviderResult<EvolutionNode> {
        let dto: EvolutionChainDto = self.get_json(url, url)?;
        Ok(dto.chain.into())
    }

    #[instrument(level = "debug", skip(self))]
    fn pokemon(&self, name: &str) -> ProviderResult<SpeciesCard> {
        let url = self.pokemon_url(name);
        let dto: PokemonDto = self.get_json(&url, name)?;
        Ok(dto.into())
    }
}

/// 404 means the resource does not exist, any other non-success status is a provider failure.
fn check_status(url: &str, what: &str, status: StatusCode) -> ProviderResult<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(ProviderError::NotFound(what.to_string()));
    }
    if !status.is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> ProviderResult<T> {
    serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
        url: url.to_string(),
        message: e.to_string(),
    })
}

// ============================================================
// WIRE FORMAT
// ============================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UrlResource {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SpeciesDto {
    name: String,
    evolution_chain: Option<UrlResource>,
    #[serde(default)]
    varieties: Vec<VarietyDto>,
}

#[derive(Debug, Deserialize)]
struct VarietyDto {
    is_default: bool,
    pokemon: NamedResource,
}

impl SpeciesDto {
    fn into_record(self, url: &str) -> ProviderResult<SpeciesRecord> {
        let evolution_chain_url = self
            .evolution_chain
            .map(|r| r.url)
            .ok_or_else(|| ProviderError::Malformed {
                url: url.to_string(),
                message: format!("species {} has no evolution chain", self.name),
            })?;

        let default_variety = self
            .varieties
            .into_iter()
            .find(|v| v.is_default)
            .map(|v| v.pokemon.name);

        Ok(SpeciesRecord {
            name: self.name,
            evolution_chain_url,
            default_variety,
        })
    }
}

#[derive(Debug, Deserialize)]
struct EvolutionChainDto {
    chain: ChainLinkDto,
}

#[derive(Debug, Deserialize)]
struct ChainLinkDto {
    species: NamedResource,
    #[serde(default)]
    evolves_to: Vec<ChainLinkDto>,
}

impl From<ChainLinkDto> for EvolutionNode {
    fn from(link: ChainLinkDto) -> Self {
        EvolutionNode::with_children(
            link.species.name,
            link.evolves_to.into_iter().map(EvolutionNode::from).collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PokemonDto {
    name: String,
    sprites: SpritesDto,
    #[serde(default)]
    types: Vec<TypeSlotDto>,
}

#[derive(Debug, Deserialize)]
struct SpritesDto {
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSpritesDto>,
}

#[derive(Debug, Deserialize)]
struct OtherSpritesDto {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ArtworkDto>,
}

#[derive(Debug, Deserialize)]
struct ArtworkDto {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlotDto {
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

impl From<PokemonDto> for SpeciesCard {
    fn from(mut dto: PokemonDto) -> Self {
        let artwork_url = dto
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default)
            .or(dto.sprites.front_default);

        dto.types.sort_by_key(|t| t.slot);

        SpeciesCard {
            name: dto.name,
            artwork_url,
            types: dto.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}
