//! Projection - catalog entries to the records tiles render

use crate::display::DisplayMode;
use crate::element::{CatalogEntry, ElementRecord, type_key};

/// Build a tile record for `entry` under the current display mode.
/// With a highlighted category, only that category stays active.
pub fn project(entry: &CatalogEntry, mode: DisplayMode, highlight: Option<&str>) -> ElementRecord {
    let key = type_key(&entry.category);
    ElementRecord {
        category: entry.category.clone(),
        group: entry.group,
        period: entry.period,
        symbol: entry.symbol.clone(),
        atomic_number: entry.atomic_number,
        atomic_name: entry.atomic_name.clone(),
        display_value: mode.value_for(entry),
        state: entry.state,
        melting_point: entry.melting_point.clone(),
        boiling_point: entry.boiling_point.clone(),
        melting_point_converted: entry.melting_point_converted.clone(),
        boiling_point_converted: entry.boiling_point_converted.clone(),
        is_active: highlight.is_none_or(|h| h == key),
    }
}

pub fn project_all<'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
    mode: DisplayMode,
    highlight: Option<&str>,
) -> Vec<ElementRecord> {
    entries
        .into_iter()
        .map(|e| project(e, mode, highlight))
        .collect()
}
