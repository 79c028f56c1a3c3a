//! ElementRecord - the read-only projection a tile renders
//!
//! Built by the parent collection from a catalog entry plus the current
//! display mode. Field names follow the kebab-case dataset format so a host
//! can also hand records over as JSON.

use std::fmt;

use serde::{Deserialize, Deserializer};

use super::matter::MatterState;

/// A measured value as it appears in the dataset: a bare number or text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    /// Empty text counts as absent
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(t) => !t.trim().is_empty(),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ElementRecord {
    #[serde(rename = "type")]
    pub category: String,
    pub group: u8,
    pub period: u8,
    pub symbol: String,
    pub atomic_number: u16,
    pub atomic_name: String,
    pub display_value: String,
    #[serde(deserialize_with = "lenient_state")]
    pub state: Option<MatterState>,
    pub melting_point: Option<Reading>,
    pub boiling_point: Option<Reading>,
    pub melting_point_converted: Option<String>,
    pub boiling_point_converted: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ElementRecord {
    /// DOM id of the tile, stable per symbol
    pub fn popover_id(&self) -> String {
        popover_id(&self.symbol)
    }

    pub fn type_key(&self) -> String {
        type_key(&self.category)
    }

    pub fn has_melting_point(&self) -> bool {
        self.melting_point.as_ref().is_some_and(Reading::is_present)
    }

    pub fn has_boiling_point(&self) -> bool {
        self.boiling_point.as_ref().is_some_and(Reading::is_present)
    }

    /// The melting/boiling row shows when either point is known
    pub fn has_points(&self) -> bool {
        self.has_melting_point() || self.has_boiling_point()
    }
}

pub fn popover_id(symbol: &str) -> String {
    format!("Popover-{symbol}")
}

/// Normalize a category label into a class-name key: whitespace runs become
/// a single `-`, everything lowercased. Runs at either end become `-` too.
pub fn type_key(category: &str) -> String {
    let mut key = String::with_capacity(category.len());
    let mut in_ws = false;
    for c in category.chars() {
        if c.is_whitespace() {
            if !in_ws {
                key.push('-');
            }
            in_ws = true;
        } else {
            key.extend(c.to_lowercase());
            in_ws = false;
        }
    }
    key
}

/// Unknown or empty phase names deserialize to `None` instead of failing.
pub(crate) fn lenient_state<'de, D>(de: D) -> Result<Option<MatterState>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.as_deref().and_then(MatterState::from_name))
}
