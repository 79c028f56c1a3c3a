//! DisplayMode - which measurement a tile's value line shows
//!
//! The mode is owned by the app and read-only below it. Tiles receive the
//! already-projected `display-value` and the mode's label as props.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    AtomicMass,
    Electronegativity,
    Density,
    ElectronConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode {0:?}")]
pub struct ParseModeError(pub String);

impl DisplayMode {
    pub const ALL: &[Self] = &[
        Self::AtomicMass,
        Self::Electronegativity,
        Self::Density,
        Self::ElectronConfiguration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AtomicMass => "Atomic Mass",
            Self::Electronegativity => "Electronegativity",
            Self::Density => "Density",
            Self::ElectronConfiguration => "Electron Configuration",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::AtomicMass => Some("u"),
            Self::Density => Some("g/cm\u{b3}"),
            Self::Electronegativity | Self::ElectronConfiguration => None,
        }
    }

    /// Human-readable label shown next to the value in the popover
    pub fn label(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({unit})", self.name()),
            None => self.name().to_string(),
        }
    }

    /// URL/query form, e.g. `atomic-mass`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AtomicMass => "atomic-mass",
            Self::Electronegativity => "electronegativity",
            Self::Density => "density",
            Self::ElectronConfiguration => "electron-configuration",
        }
    }

    /// Field lookup for one catalog entry. Absent data is an empty string.
    pub fn value_for(&self, entry: &CatalogEntry) -> String {
        let reading = match self {
            Self::AtomicMass => entry.atomic_mass.as_ref(),
            Self::Electronegativity => entry.electronegativity.as_ref(),
            Self::Density => entry.density.as_ref(),
            Self::ElectronConfiguration => {
                return entry.electron_configuration.clone().unwrap_or_default();
            }
        };
        reading.map(|r| r.to_string()).unwrap_or_default()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.slug() == wanted)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Reading;

    #[test]
    fn labels() {
        assert_eq!(DisplayMode::AtomicMass.label(), "Atomic Mass (u)");
        assert_eq!(DisplayMode::Electronegativity.label(), "Electronegativity");
        assert_eq!(DisplayMode::Density.label(), "Density (g/cm³)");
    }

    #[test]
    fn slug_round_trip() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<DisplayMode>(), Ok(*mode));
        }
    }

    #[test]
    fn parse_is_forgiving_about_separators() {
        assert_eq!("Atomic_Mass".parse(), Ok(DisplayMode::AtomicMass));
        assert_eq!("electron configuration".parse(), Ok(DisplayMode::ElectronConfiguration));
        assert_eq!("mass".parse::<DisplayMode>(), Err(ParseModeError("mass".into())));
    }

    #[test]
    fn value_lookup() {
        let entry = CatalogEntry {
            atomic_mass: Some(Reading::Number(4.0026)),
            electron_configuration: Some("1s2".into()),
            ..Default::default()
        };
        assert_eq!(DisplayMode::AtomicMass.value_for(&entry), "4.0026");
        assert_eq!(DisplayMode::ElectronConfiguration.value_for(&entry), "1s2");
        assert_eq!(DisplayMode::Electronegativity.value_for(&entry), "");
    }
}
