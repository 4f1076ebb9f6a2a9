//! reqwest-backed [`PokeApi`] implementation against the public PokeAPI.

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::types::{Pokemon, PokemonSpecies, ResourceList, TypeData};
use super::PokeApi;
use crate::error::{Error, Result};

const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// The catalog endpoint is paginated; requesting one oversized page gets
/// the whole catalog in a single call, which the adapter truncates locally.
const CATALOG_PAGE_SIZE: u32 = 10000;

/// HTTP client for the public PokeAPI.
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// Point the client at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        kind: &'static str,
        name: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                kind,
                name: name.to_string(),
            });
        }
        let body = response.error_for_status()?.text().await?;

        serde_json::from_str(&body)
            .map_err(|err| Error::DataIntegrity(format!("malformed {} payload: {}", kind, err)))
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PokeApi for RestClient {
    async fn list_pokemon(&self) -> Result<ResourceList> {
        let path = format!("pokemon?limit={}&offset=0", CATALOG_PAGE_SIZE);
        self.get_json(&path, "catalog", "pokemon").await
    }

    async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&format!("pokemon/{}", name), "pokemon", name)
            .await
    }

    async fn pokemon_species(&self, name: &str) -> Result<PokemonSpecies> {
        self.get_json(&format!("pokemon-species/{}", name), "pokemon species", name)
            .await
    }

    async fn type_(&self, name: &str) -> Result<TypeData> {
        self.get_json(&format!("type/{}", name), "type", name).await
    }
}
