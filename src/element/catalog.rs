//! Catalog - the element dataset the table is built from
//!
//! Entries are loaded from kebab-case JSON and validated once. Symbols are
//! unique; they double as DOM identity keys.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::matter::MatterState;
use super::record::{Reading, lenient_state};

const BUILTIN_JSON: &str = include_str!("../../assets/elements.json");

pub const MAX_GROUP: u8 = 18;
pub const MAX_PERIOD: u8 = 7;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed element data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry #{index} has no symbol")]
    MissingSymbol { index: usize },
    #[error("duplicate symbol {0:?}")]
    DuplicateSymbol(String),
    #[error("{symbol}: atomic number must be positive")]
    ZeroAtomicNumber { symbol: String },
    #[error("{symbol}: group {group} / period {period} is outside the 18x7 table")]
    OutOfTable { symbol: String, group: u8, period: u8 },
}

/// One dataset row, before projection for a display mode
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub category: String,
    pub group: u8,
    pub period: u8,
    pub symbol: String,
    pub atomic_number: u16,
    pub atomic_name: String,
    #[serde(deserialize_with = "lenient_state")]
    pub state: Option<MatterState>,
    pub atomic_mass: Option<Reading>,
    pub electronegativity: Option<Reading>,
    pub density: Option<Reading>,
    pub electron_configuration: Option<String>,
    pub melting_point: Option<Reading>,
    pub boiling_point: Option<Reading>,
    pub melting_point_converted: Option<String>,
    pub boiling_point_converted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(mut entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        entries.sort_by_key(|e| e.atomic_number);
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in atomic-number order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, symbol: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Distinct category labels, in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.entries {
            if !out.contains(&e.category) {
                out.push(e.category.clone());
            }
        }
        out
    }
}

fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, e) in entries.iter().enumerate() {
        if e.symbol.trim().is_empty() {
            return Err(CatalogError::MissingSymbol { index });
        }
        if !seen.insert(e.symbol.as_str()) {
            return Err(CatalogError::DuplicateSymbol(e.symbol.clone()));
        }
        if e.atomic_number == 0 {
            return Err(CatalogError::ZeroAtomicNumber { symbol: e.symbol.clone() });
        }
        if !(1..=MAX_GROUP).contains(&e.group) || !(1..=MAX_PERIOD).contains(&e.period) {
            return Err(CatalogError::OutOfTable {
                symbol: e.symbol.clone(),
                group: e.group,
                period: e.period,
            });
        }
    }
    Ok(())
}
