//! Wire structs for the PokeAPI payloads.
//!
//! Only the fields the adapter reads are declared; serde ignores the rest
//! of the (very large) upstream documents.

use serde::{Deserialize, Serialize};

/// A `{ "name": ..., "url": ... }` reference as used all over the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Paginated catalog listing (`GET /pokemon?limit=...`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceList {
    pub count: u32,
    pub results: Vec<NamedResource>,
}

/// The parts of `GET /pokemon/{name}` the adapter consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    pub r#type: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveSlot {
    pub r#move: NamedResource,
}

/// Top-level sprite URL fields of the species payload. Declaration order
/// matches the order the upstream exposes them in.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

impl Sprites {
    /// Every sprite URL actually present, in field order.
    pub fn urls(&self) -> Vec<String> {
        [
            &self.back_default,
            &self.back_female,
            &self.back_shiny,
            &self.back_shiny_female,
            &self.front_default,
            &self.front_female,
            &self.front_shiny,
            &self.front_shiny_female,
        ]
        .into_iter()
        .filter_map(|url| url.clone())
        .collect()
    }
}

/// The parts of `GET /pokemon-species/{name}` the adapter consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
}

/// The parts of `GET /type/{name}` the adapter consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeData {
    pub name: String,
    pub damage_relations: DamageRelationSet,
}

/// The six effectiveness categories of one elemental type. Declaration
/// order matches the upstream document, which is the order the adapter
/// presents them in.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DamageRelationSet {
    pub no_damage_to: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub double_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
}

impl DamageRelationSet {
    /// Upstream field name and related types for each category, in
    /// declaration order.
    pub fn categories(&self) -> [(&'static str, &[NamedResource]); 6] {
        [
            ("no_damage_to", &self.no_damage_to),
            ("half_damage_to", &self.half_damage_to),
            ("double_damage_to", &self.double_damage_to),
            ("no_damage_from", &self.no_damage_from),
            ("half_damage_from", &self.half_damage_from),
            ("double_damage_from", &self.double_damage_from),
        ]
    }
}
