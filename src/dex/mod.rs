//! The data adapter: turns raw PokeAPI payloads into [`SpeciesRecord`]s.
//!
//! One `fetch_species` call performs exactly one species lookup, one
//! flavor-text lookup and one type lookup per declared type (1–2),
//! sequentially, then assembles the record. Both public operations are
//! memoized by their full argument tuple for the caller-supplied TTL.

pub mod record;
pub mod text;

use std::time::Duration;

use log::{debug, info};

use crate::api::types::Pokemon;
use crate::api::PokeApi;
use crate::cache::TtlCache;
use crate::error::{Error, Result};
use record::{DamageTable, SpeciesImages, SpeciesMetadata, SpeciesRecord, StatTable};
use text::{capitalize, clean_flavor_text, effect_label};

/// CDN root the artwork and animation URL templates hang off.
const SPRITE_CDN_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other";

/// Species lookup front-end over any [`PokeApi`] client.
///
/// Holds no mutable state besides the memo caches; records are immutable
/// once produced and are returned as clones of the cached value.
pub struct Pokedex<C> {
    client: C,
    catalog_cache: TtlCache<(usize, Duration), Vec<String>>,
    species_cache: TtlCache<(String, Duration), SpeciesRecord>,
}

impl<C: PokeApi> Pokedex<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            catalog_cache: TtlCache::new(),
            species_cache: TtlCache::new(),
        }
    }

    /// The injected upstream client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The first `limit` catalog entries, capitalized, upstream order.
    ///
    /// The whole catalog is fetched and truncated locally; asking for more
    /// entries than the upstream has simply returns fewer.
    pub async fn list_species_names(&self, limit: usize, ttl: Duration) -> Result<Vec<String>> {
        let key = (limit, ttl);
        if let Some(names) = self.catalog_cache.get(&key, ttl) {
            debug!("catalog cache hit (limit {})", limit);
            return Ok(names);
        }

        let catalog = self.client.list_pokemon().await?;
        let names: Vec<String> = catalog
            .results
            .iter()
            .take(limit)
            .map(|entry| capitalize(&entry.name))
            .collect();
        info!("fetched catalog: {} of {} entries", names.len(), catalog.count);

        self.catalog_cache.insert(key, names.clone());
        Ok(names)
    }

    /// A fully assembled record for `name` (case-insensitive).
    ///
    /// Any sub-fetch failure fails the whole call; no partial records are
    /// produced.
    pub async fn fetch_species(&self, name: &str, ttl: Duration) -> Result<SpeciesRecord> {
        let key = (name.to_lowercase(), ttl);
        if let Some(record) = self.species_cache.get(&key, ttl) {
            debug!("species cache hit for \"{}\"", key.0);
            return Ok(record);
        }

        info!("fetching species \"{}\"", key.0);
        let pokemon = self.client.pokemon(&key.0).await?;
        let record = SpeciesRecord {
            images: build_images(&pokemon),
            description: self.fetch_description(&key.0).await?,
            stats: build_stats(&pokemon)?,
            metadata: build_metadata(&pokemon)?,
            damage_relations: self.fetch_damage_relations(&pokemon).await?,
            moves: build_moves(&pokemon),
        };

        self.species_cache.insert(key, record.clone());
        Ok(record)
    }

    async fn fetch_description(&self, name: &str) -> Result<String> {
        let species = self.client.pokemon_species(name).await?;
        let entry = species.flavor_text_entries.first().ok_or_else(|| {
            Error::DataIntegrity(format!("species \"{}\" has no flavor text entries", name))
        })?;
        Ok(clean_flavor_text(&entry.flavor_text))
    }

    /// Accumulates the six effectiveness categories over the species' types
    /// in slot order. Two-type species get the plain concatenation of both
    /// types' lists per category, duplicates kept.
    async fn fetch_damage_relations(&self, pokemon: &Pokemon) -> Result<DamageTable> {
        if pokemon.types.is_empty() {
            return Err(Error::DataIntegrity(format!(
                "species \"{}\" declares no types",
                pokemon.name
            )));
        }

        let mut table = DamageTable::default();
        for slot in &pokemon.types {
            let type_data = self.client.type_(&slot.r#type.name).await?;
            for (field, related) in type_data.damage_relations.categories() {
                table.extend_row(
                    effect_label(field),
                    related.iter().map(|r| capitalize(&r.name)),
                );
            }
        }
        Ok(table)
    }
}

fn build_images(pokemon: &Pokemon) -> SpeciesImages {
    SpeciesImages {
        image_url: format!("{}/official-artwork/{}.png", SPRITE_CDN_URL, pokemon.id),
        gif_url: format!("{}/showdown/{}.gif", SPRITE_CDN_URL, pokemon.id),
        sprites: pokemon.sprites.urls(),
    }
}

fn build_stats(pokemon: &Pokemon) -> Result<StatTable> {
    let rows = pokemon
        .stats
        .iter()
        .map(|slot| (capitalize(&slot.stat.name), slot.base_stat))
        .collect();
    StatTable::from_rows(rows)
}

fn build_metadata(pokemon: &Pokemon) -> Result<SpeciesMetadata> {
    if pokemon.types.is_empty() {
        return Err(Error::DataIntegrity(format!(
            "species \"{}\" declares no types",
            pokemon.name
        )));
    }
    let types: Vec<String> = pokemon
        .types
        .iter()
        .map(|slot| capitalize(&slot.r#type.name))
        .collect();
    Ok(SpeciesMetadata {
        name: capitalize(&pokemon.name),
        id: pokemon.id,
        height: pokemon.height,
        weight: pokemon.weight,
        types: types.join(", "),
    })
}

fn build_moves(pokemon: &Pokemon) -> Vec<String> {
    pokemon
        .moves
        .iter()
        .map(|slot| capitalize(&slot.r#move.name))
        .collect()
}
