pub mod api;
pub mod cache;
pub mod config;
pub mod dex;
pub mod error;

pub use api::{rest::RestClient, PokeApi};
pub use cache::TtlCache;
pub use config::{Config, DEFAULT_CATALOG_LIMIT, DEFAULT_TTL};
pub use dex::{
    record::{DamageTable, SpeciesImages, SpeciesMetadata, SpeciesRecord, StatTable},
    Pokedex,
};
pub use error::{Error, Result};
