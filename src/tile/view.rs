//! Tile view tree - what a tile looks like for a given record and state
//!
//! `build_tile` is a pure function of its inputs; the component re-runs it
//! after every state change and maps the result onto rsx.

use crate::element::{ElementRecord, Glyph, Reading};
use crate::primitives::{Opacity, Rect};

use super::state::TileState;

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub id: String,
    pub body_class: String,
    pub atomic_number: String,
    pub icon: Option<Glyph>,
    pub symbol: String,
    pub atomic_name: String,
    pub display_value: String,
    /// Present only while the popover is open
    pub popover: Option<PopoverView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopoverView {
    pub header_class: String,
    pub title: String,
    pub rows: Vec<PopoverRow>,
    pub points: Option<PointsView>,
    pub anchor: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopoverRow {
    pub label: String,
    pub value: String,
    pub value_class: String,
}

/// Melting/boiling line; each half is independent
#[derive(Debug, Clone, PartialEq)]
pub struct PointsView {
    pub icon_class: String,
    pub melting: Option<String>,
    pub boiling: Option<String>,
}

impl PointsView {
    pub const MELTING_GLYPH: Glyph = Glyph::Droplet;
    pub const BOILING_GLYPH: Glyph = Glyph::Cloud;
}

pub fn build_tile(record: &ElementRecord, state: &TileState, display_label: &str) -> TileView {
    let key = record.type_key();
    let opacity = Opacity::for_active(record.is_active);
    let body_class = format!(
        "tile-body {key}-bg group-{} period-{} {}",
        record.group,
        record.period,
        opacity.describe(),
    );

    TileView {
        id: record.popover_id(),
        body_class,
        atomic_number: record.atomic_number.to_string(),
        icon: state.icon,
        symbol: record.symbol.clone(),
        atomic_name: record.atomic_name.clone(),
        display_value: record.display_value.clone(),
        popover: state
            .popover_open
            .then(|| build_popover(record, display_label, state.anchor)),
    }
}

pub fn build_popover(record: &ElementRecord, display_label: &str, anchor: Option<Rect>) -> PopoverView {
    let key = record.type_key();
    let row = |label: &str, value: String, value_class: String| PopoverRow {
        label: label.to_string(),
        value,
        value_class,
    };

    let rows = vec![
        row("Atomic Number", record.atomic_number.to_string(), "text-right".into()),
        row("Symbol", record.symbol.clone(), "text-right".into()),
        row("Type", record.category.clone(), format!("{key}-border-bottom")),
        row(display_label, record.display_value.clone(), "text-right".into()),
    ];

    let points = record.has_points().then(|| PointsView {
        icon_class: format!("{key}-text"),
        melting: point_text(record.melting_point.as_ref(), record.melting_point_converted.as_deref()),
        boiling: point_text(record.boiling_point.as_ref(), record.boiling_point_converted.as_deref()),
    });

    PopoverView {
        header_class: format!("{key}-bg"),
        title: record.atomic_name.clone(),
        rows,
        points,
        anchor,
    }
}

/// Converted text wins; a bare reading is shown as-is. Absent point, no text.
fn point_text(raw: Option<&Reading>, converted: Option<&str>) -> Option<String> {
    let raw = raw.filter(|r| r.is_present())?;
    match converted {
        Some(c) if !c.trim().is_empty() => Some(c.to_string()),
        _ => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::MatterState;
    use crate::tile::state::TileMsg;

    fn helium() -> ElementRecord {
        ElementRecord {
            category: "Noble   Gas".into(),
            group: 18,
            period: 1,
            symbol: "He".into(),
            atomic_number: 2,
            atomic_name: "Helium".into(),
            display_value: "4.0026".into(),
            state: Some(MatterState::Gas),
            melting_point: Some(Reading::Number(0.95)),
            boiling_point: Some(Reading::Number(4.22)),
            melting_point_converted: Some("-272.2 °C".into()),
            boiling_point_converted: Some("-268.93 °C".into()),
            is_active: true,
        }
    }

    fn open(record: &ElementRecord) -> TileView {
        let state = TileState::new(record.state).update(TileMsg::Click);
        build_tile(record, &state, "Atomic Mass (u)")
    }

    #[test]
    fn closed_tile() {
        let he = helium();
        let view = build_tile(&he, &TileState::new(he.state), "Atomic Mass (u)");
        assert_eq!(view.id, "Popover-He");
        assert_eq!(view.body_class, "tile-body noble-gas-bg group-18 period-1 active");
        assert_eq!(view.icon, Some(Glyph::Cloud));
        assert_eq!(view.atomic_number, "2");
        assert_eq!(view.display_value, "4.0026");
        assert!(view.popover.is_none());
    }

    #[test]
    fn inactive_treatment() {
        let he = ElementRecord { is_active: false, ..helium() };
        let view = build_tile(&he, &TileState::default(), "");
        assert!(view.body_class.ends_with(" inactive"));
        assert!(!view.body_class.contains(" active"));
    }

    #[test]
    fn popover_rows_use_display_label() {
        let pop = open(&helium()).popover.unwrap();
        assert_eq!(pop.header_class, "noble-gas-bg");
        assert_eq!(pop.title, "Helium");
        let labels: Vec<&str> = pop.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Atomic Number", "Symbol", "Type", "Atomic Mass (u)"]);
        assert_eq!(pop.rows[2].value, "Noble   Gas");
        assert_eq!(pop.rows[2].value_class, "noble-gas-border-bottom");
        assert_eq!(pop.rows[3].value, "4.0026");
    }

    #[test]
    fn points_both() {
        let points = open(&helium()).popover.unwrap().points.unwrap();
        assert_eq!(points.icon_class, "noble-gas-text");
        assert_eq!(points.melting.as_deref(), Some("-272.2 °C"));
        assert_eq!(points.boiling.as_deref(), Some("-268.93 °C"));
    }

    #[test]
    fn points_absent() {
        let he = ElementRecord { melting_point: None, boiling_point: None, ..helium() };
        assert!(open(&he).popover.unwrap().points.is_none());
    }

    #[test]
    fn points_only_boiling() {
        let c = ElementRecord {
            melting_point: None,
            melting_point_converted: None,
            boiling_point_converted: None,
            ..helium()
        };
        let points = open(&c).popover.unwrap().points.unwrap();
        assert_eq!(points.melting, None);
        assert_eq!(points.boiling.as_deref(), Some("4.22"));
    }

    #[test]
    fn points_only_melting() {
        let he = ElementRecord {
            boiling_point: None,
            boiling_point_converted: None,
            ..helium()
        };
        let points = open(&he).popover.unwrap().points.unwrap();
        assert_eq!(points.melting.as_deref(), Some("-272.2 °C"));
        assert_eq!(points.boiling, None);
    }

    #[test]
    fn converted_without_raw_is_ignored() {
        let he = ElementRecord { melting_point: None, ..helium() };
        let points = open(&he).popover.unwrap().points.unwrap();
        assert_eq!(points.melting, None);
    }

    #[test]
    fn missing_fields_render_empty() {
        let blank = ElementRecord { symbol: "X".into(), ..Default::default() };
        let view = open(&blank);
        assert_eq!(view.atomic_name, "");
        assert_eq!(view.icon, None);
        assert_eq!(view.body_class, "tile-body -bg group-0 period-0 inactive");
        assert!(view.popover.unwrap().points.is_none());
    }

    #[test]
    fn anchor_passes_through() {
        let he = helium();
        let anchor = Rect::new(1.0, 2.0, 3.0, 4.0);
        let state = TileState::new(he.state).update(TileMsg::PointerEnter(anchor));
        assert_eq!(build_tile(&he, &state, "").popover.unwrap().anchor, Some(anchor));
    }
}
