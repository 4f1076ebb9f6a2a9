//! The assembled per-species result record and its tables.
//!
//! Records are built once by the adapter and never mutated afterwards;
//! presentation code only reads them.

use serde::Serialize;

use crate::error::{Error, Result};

/// Everything the presentation layer shows for one species.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeciesRecord {
    pub images: SpeciesImages,
    pub description: String,
    pub stats: StatTable,
    pub metadata: SpeciesMetadata,
    pub damage_relations: DamageTable,
    pub moves: Vec<String>,
}

/// CDN-derived artwork/animation URLs plus whatever sprite URLs the
/// species payload carried, in upstream field order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeciesImages {
    pub image_url: String,
    pub gif_url: String,
    pub sprites: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeciesMetadata {
    pub name: String,
    pub id: u32,
    pub height: u32,
    pub weight: u32,
    /// Comma-joined capitalized type names, slot order.
    pub types: String,
}

/// Stat name -> base value, upstream order preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StatTable(Vec<(String, i64)>);

impl StatTable {
    /// Builds the table, rejecting rows whose (capitalized) names collide.
    /// A collision would silently drop a stat, so it is treated as a
    /// data-integrity defect instead.
    pub fn from_rows(rows: Vec<(String, i64)>) -> Result<Self> {
        for (i, (name, _)) in rows.iter().enumerate() {
            if rows[..i].iter().any(|(seen, _)| seen == name) {
                return Err(Error::DataIntegrity(format!(
                    "stat name collision after capitalization: \"{}\"",
                    name
                )));
            }
        }
        Ok(Self(rows))
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|(row, _)| row == name)
            .map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, i64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Effect label -> related type names, label order as first seen upstream.
/// Lists for multi-type species are concatenations in type order; duplicate
/// names are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DamageTable(Vec<(String, Vec<String>)>);

impl DamageTable {
    /// Appends `names` to the row with `label`, creating the row at the end
    /// of the table if it does not exist yet.
    pub fn extend_row(&mut self, label: String, names: impl IntoIterator<Item = String>) {
        match self.0.iter_mut().find(|(row, _)| *row == label) {
            Some((_, values)) => values.extend(names),
            None => self.0.push((label, names.into_iter().collect())),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(row, _)| row == label)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<String>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
