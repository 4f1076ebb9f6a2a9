//! Runtime configuration: a TTL, a catalog-size limit, and an optional
//! base-URL override. The library takes these as explicit arguments; the
//! CLI binary fills them from the environment (after `dotenv`).

use std::env;
use std::time::Duration;

/// Cached fetch results stay valid for 30 minutes by default.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// The original 151-species catalog.
pub const DEFAULT_CATALOG_LIMIT: usize = 151;

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` means the public PokeAPI host.
    pub base_url: Option<String>,
    pub ttl: Duration,
    pub catalog_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            ttl: DEFAULT_TTL,
            catalog_limit: DEFAULT_CATALOG_LIMIT,
        }
    }
}

impl Config {
    /// Reads `POKEDEX_BASE_URL`, `POKEDEX_TTL_SECS` and
    /// `POKEDEX_CATALOG_LIMIT`; unset or unparsable variables keep their
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("POKEDEX_BASE_URL") {
            config.base_url = Some(url);
        }
        if let Ok(secs) = env::var("POKEDEX_TTL_SECS") {
            config.ttl = secs
                .parse()
                .map(Duration::from_secs)
                .unwrap_or(config.ttl);
        }
        if let Ok(limit) = env::var("POKEDEX_CATALOG_LIMIT") {
            config.catalog_limit = limit.parse().unwrap_or(config.catalog_limit);
        }
        config
    }
}
