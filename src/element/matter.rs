//! MatterState - standard-state phase of an element and its glyph

use std::fmt;

use serde::Deserialize;

/// Phase at standard temperature and pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatterState {
    Solid,
    Liquid,
    Gas,
}

impl MatterState {
    /// Lenient lookup used by the catalog: unknown names mean "no phase".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "liquid" => Some(Self::Liquid),
            "gas" => Some(Self::Gas),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Gas => "gas",
        }
    }
}

impl fmt::Display for MatterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Icon glyphs drawn on tiles and in the popover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Circle,
    Droplet,
    Cloud,
}

impl Glyph {
    /// Fixed lookup from phase to glyph. No phase, no glyph.
    pub fn for_state(state: Option<MatterState>) -> Option<Self> {
        match state? {
            MatterState::Solid => Some(Self::Circle),
            MatterState::Liquid => Some(Self::Droplet),
            MatterState::Gas => Some(Self::Cloud),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Droplet => "droplet",
            Self::Cloud => "cloud",
        }
    }

    /// Inline SVG, sized to the surrounding font and tinted with `currentColor`
    pub fn svg(&self) -> &'static str {
        match self {
            Self::Circle => CIRCLE_SVG,
            Self::Droplet => DROPLET_SVG,
            Self::Cloud => CLOUD_SVG,
        }
    }
}

const CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0.75em" height="0.75em" viewBox="0 0 24 24" fill="currentColor"><circle cx="12" cy="12" r="10"/></svg>"#;

const DROPLET_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0.75em" height="0.75em" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2C12 2 5 10.2 5 15a7 7 0 0 0 14 0c0-4.8-7-13-7-13z"/></svg>"#;

const CLOUD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0.75em" height="0.75em" viewBox="0 0 24 24" fill="currentColor"><path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_mapping() {
        assert_eq!(Glyph::for_state(Some(MatterState::Solid)), Some(Glyph::Circle));
        assert_eq!(Glyph::for_state(Some(MatterState::Liquid)), Some(Glyph::Droplet));
        assert_eq!(Glyph::for_state(Some(MatterState::Gas)), Some(Glyph::Cloud));
    }

    #[test]
    fn no_state_no_glyph() {
        assert_eq!(Glyph::for_state(None), None);
    }

    #[test]
    fn state_deserializes_lowercase() {
        let s: MatterState = serde_json::from_str("\"liquid\"").unwrap();
        assert_eq!(s, MatterState::Liquid);
        assert!(serde_json::from_str::<MatterState>("\"plasma\"").is_err());
    }

    #[test]
    fn from_name_is_lenient() {
        assert_eq!(MatterState::from_name(" Gas "), Some(MatterState::Gas));
        assert_eq!(MatterState::from_name("plasma"), None);
        assert_eq!(MatterState::from_name(""), None);
    }
}
