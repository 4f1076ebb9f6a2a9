//! Interactive Pokédex CLI
//!
//! Terminal front-end for the pokefetch adapter: pick a species from the
//! catalog dropdown, get its images, description, stats, type
//! effectiveness and move list. Fetched records are cached for the
//! configured TTL (30 minutes by default), so revisiting a species inside
//! that window is instant.
//!
//! Configuration comes from the environment (a `.env` file is honored):
//!   POKEDEX_BASE_URL       alternate API host
//!   POKEDEX_TTL_SECS       cache TTL in seconds
//!   POKEDEX_CATALOG_LIMIT  number of catalog entries to offer

use inquire::{Confirm, Select};
use log::LevelFilter;

use pokefetch::{Config, Error, Pokedex, RestClient, SpeciesRecord};

/// Pikachu's position in the default 151-entry catalog.
const DEFAULT_CURSOR: usize = 24;

fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("pokefetch", LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()
        .ok();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_logger();

    let config = Config::from_env();
    let client = match &config.base_url {
        Some(url) => RestClient::with_base_url(url),
        None => RestClient::new(),
    };
    let dex = Pokedex::new(client);

    println!("╔═══════════════════════════════════════╗");
    println!("║            ⚡ Pokédex CLI ⚡           ║");
    println!("╚═══════════════════════════════════════╝");
    println!();
    println!("* Select a Pokemon to see its image URLs, stats, type");
    println!("  effectiveness, and moves.");
    println!("* The API usually takes a few seconds to fetch everything");
    println!("  for a Pokemon the first time.");
    println!(
        "* Visited Pokemon data will be cached for {} minutes.",
        config.ttl.as_secs() / 60
    );
    println!();

    let names = match dex.list_species_names(config.catalog_limit, config.ttl).await {
        Ok(names) => names,
        Err(err) => {
            eprintln!("could not fetch the species catalog: {}", err);
            std::process::exit(1);
        }
    };
    if names.is_empty() {
        eprintln!("the species catalog came back empty");
        std::process::exit(1);
    }

    loop {
        let cursor = if names.len() > DEFAULT_CURSOR {
            DEFAULT_CURSOR
        } else {
            0
        };
        let selection = Select::new("Select a Pokemon", names.clone())
            .with_starting_cursor(cursor)
            .prompt();
        let name = match selection {
            Ok(name) => name,
            Err(_) => break,
        };

        match dex.fetch_species(&name, config.ttl).await {
            Ok(record) => render_record(&record),
            Err(Error::NotFound { kind, name }) => {
                eprintln!("{} \"{}\" is not known upstream", kind, name)
            }
            Err(err) => eprintln!("failed to fetch {}: {}", name, err),
        }

        let again = Confirm::new("Look up another?")
            .with_default(true)
            .prompt()
            .unwrap_or(false);
        if !again {
            break;
        }
    }
}

fn render_record(record: &SpeciesRecord) {
    println!();
    section("Images");
    println!("  artwork:  {}", record.images.image_url);
    println!("  animated: {}", record.images.gif_url);
    for sprite in &record.images.sprites {
        println!("  sprite:   {}", sprite);
    }

    section("Description");
    println!("  {}", record.description);

    section("Stats and Metadata");
    let width = record
        .stats
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, value) in record.stats.iter() {
        println!("  {:width$}  {}", name, value, width = width);
    }
    println!();
    println!("  Name    {}", record.metadata.name);
    println!("  ID      {}", record.metadata.id);
    println!("  Height  {}", record.metadata.height);
    println!("  Weight  {}", record.metadata.weight);
    println!("  Types   {}", record.metadata.types);

    section("Damage Relations");
    let width = record
        .damage_relations
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    for (label, types) in record.damage_relations.iter() {
        println!("  {:width$}  {}", label, types.join(", "), width = width);
    }

    section("Moves");
    println!("  {} available:", record.moves.len());
    for chunk in record.moves.chunks(6) {
        println!("  {}", chunk.join(", "));
    }
    println!();
}

fn section(title: &str) {
    println!();
    println!("── {} ──", title);
}
