//! Upstream species/catalog client.
//!
//! The adapter only ever talks to PokeAPI through the [`PokeApi`] trait so
//! tests can substitute an in-memory upstream. The real REST-backed
//! implementation lives in [`rest`].

pub mod rest;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::{Pokemon, PokemonSpecies, ResourceList, TypeData};

/// The four upstream lookups the adapter needs.
///
/// Every call maps to exactly one HTTP request in the REST implementation;
/// no implementation is expected to retry or cache.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// The full species catalog, upstream order.
    async fn list_pokemon(&self) -> Result<ResourceList>;

    /// Species payload by (lowercase) name.
    async fn pokemon(&self, name: &str) -> Result<Pokemon>;

    /// Flavor-text payload by (lowercase) species name.
    async fn pokemon_species(&self, name: &str) -> Result<PokemonSpecies>;

    /// Damage-relation payload for one elemental type.
    async fn type_(&self, name: &str) -> Result<TypeData>;
}
