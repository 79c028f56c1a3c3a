//! AppConfig - startup settings taken from the page query string
//!
//! `?mode=density&type=noble-gas` picks the display mode and pre-selects a
//! category in the legend. Anything unrecognised falls back to defaults.

use dioxus::logger::tracing::warn;

use crate::display::DisplayMode;
use crate::element::type_key;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub mode: DisplayMode,
    /// Type key of the highlighted category, if any
    pub highlight: Option<String>,
}

impl AppConfig {
    /// Build from already-decoded `mode` and `type` query values
    pub fn from_params(mode: Option<&str>, category: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(mode) = mode {
            match mode.parse::<DisplayMode>() {
                Ok(mode) => config.mode = mode,
                Err(e) => warn!("ignoring query parameter: {e}"),
            }
        }
        config.highlight = category
            .map(type_key)
            .filter(|key| !key.is_empty());
        config
    }

    /// Read the browser location. Outside a browser this is the default.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
            warn!("unreadable query string {search:?}");
            return Self::default();
        };
        Self::from_params(params.get("mode").as_deref(), params.get("type").as_deref())
    }
}
