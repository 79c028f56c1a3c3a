//! Stylesheet - category palette and tile/popover layout
//!
//! Category rules are keyed by the normalized type key, so any category in
//! the dataset gets `{key}-bg`, `{key}-border-bottom` and `{key}-text`.

use crate::element::type_key;
use crate::primitives::Opacity;

/// Category label → colour. Unlisted categories fall back to `FALLBACK`.
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Alkali Metal", "#ff8a65"),
    ("Alkaline Earth Metal", "#ffb74d"),
    ("Transition Metal", "#ffd54f"),
    ("Post-transition Metal", "#aed581"),
    ("Metalloid", "#4db6ac"),
    ("Nonmetal", "#4fc3f7"),
    ("Halogen", "#7986cb"),
    ("Noble Gas", "#ba68c8"),
    ("Lanthanide", "#f06292"),
    ("Actinide", "#e57373"),
];

pub const FALLBACK: &str = "#bdbdbd";

const BASE: &str = "
body { margin: 0; background: #0f0f1a; color: #e5e7eb; font-family: system-ui, sans-serif; }
.periodic-table { display: grid; grid-template-columns: repeat(18, minmax(0, 1fr)); gap: 1px; width: 100%; max-width: 1200px; }
.cell { display: flex; }
.element-tile { width: 100%; display: flex; flex-direction: column; align-items: stretch; position: relative; }
.tile-button { flex-grow: 1; background-color: transparent; padding: 0; margin: 0; border: none; display: flex; flex-direction: column; align-items: stretch; font: inherit; }
.tile-body { display: block; margin: 1px; padding: 4px; cursor: pointer; flex-grow: 1; color: #111; transition: opacity 0.15s; }
.tile-info { display: block; text-align: center; white-space: nowrap; line-height: 1.3; }
.tile-number { font-size: 9pt; display: flex; }
.tile-state { margin-left: auto; }
.tile-symbol { display: block; font-size: 12pt; font-weight: bold; }
.tile-name { display: block; font-size: 9pt; overflow: hidden; text-overflow: ellipsis; }
.tile-value { font-size: 9pt; display: flex; flex-wrap: wrap; justify-content: center; }
.popover-paper { background: white; color: #111; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); text-align: left; overflow: hidden; }
.popover-header { margin: 0; padding: 12px; color: black; font-size: 1.1rem; }
.popover-content { padding: 12px; }
.popover-content table { width: 100%; border-collapse: collapse; }
.popover-label { width: 125px; padding: 8px 8px 8px 0; font-weight: 600; }
.text-right { text-align: right; }
.popover-points { display: grid; grid-template-columns: 1fr 1fr; text-align: center; padding: 16px 0; }
@media (max-width: 1280px) { .tile-name { display: none; } }
";

pub fn color_for(key: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(label, _)| type_key(label) == key)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK)
}

/// Colour rules for one category key
pub fn category_rules(key: &str) -> String {
    let color = color_for(key);
    format!(
        ".{key}-bg {{ background-color: {color}; }}\n\
         .{key}-border-bottom {{ border-bottom: 2px solid {color}; text-align: right; }}\n\
         .{key}-text {{ color: {color}; }}\n"
    )
}

/// Full stylesheet for the given category keys plus the fixed layout rules
pub fn stylesheet<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    let mut css = String::from(BASE);
    css.push_str(&format!(".active {{ {} }}\n", Opacity::ACTIVE.to_css()));
    css.push_str(&format!(".inactive {{ {} }}\n", Opacity::INACTIVE.to_css()));
    for group in 1..=18 {
        css.push_str(&format!(".cell.group-{group} {{ grid-column: {group}; }}\n"));
    }
    for period in 1..=7 {
        css.push_str(&format!(".cell.period-{period} {{ grid-row: {period}; }}\n"));
    }
    for key in keys {
        if !key.is_empty() {
            css.push_str(&category_rules(key));
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_colors() {
        assert_eq!(color_for("noble-gas"), "#ba68c8");
        assert_eq!(color_for("post-transition-metal"), "#aed581");
        assert_eq!(color_for("superheavy"), FALLBACK);
    }

    #[test]
    fn rules_use_key() {
        let css = category_rules("alkali-metal");
        assert!(css.contains(".alkali-metal-bg { background-color: #ff8a65; }"));
        assert!(css.contains(".alkali-metal-border-bottom"));
        assert!(css.contains(".alkali-metal-text { color: #ff8a65; }"));
    }

    #[test]
    fn stylesheet_has_placement_and_treatments() {
        let css = stylesheet(["halogen", ""]);
        assert!(css.contains(".cell.group-17 { grid-column: 17; }"));
        assert!(css.contains(".cell.period-4 { grid-row: 4; }"));
        assert!(css.contains(".inactive { opacity: 0.25; }"));
        assert!(css.contains(".halogen-bg"));
        assert!(!css.contains(".-bg"));
    }
}
