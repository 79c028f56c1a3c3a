mod config;
mod display;
mod element;
mod element_page;
mod primitives;
mod styles;
mod table;
mod tile;

use std::rc::Rc;

use dioxus::logger::tracing::{Level, error, info};
use dioxus::prelude::*;

use config::AppConfig;
use element::{Catalog, type_key};
use element_page::ElementPage;
use table::PeriodicTable;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    PeriodicTable {},
    #[route("/element/:symbol")]
    ElementPage { symbol: String },
}

fn load_catalog() -> Result<Rc<Catalog>, String> {
    match Catalog::builtin() {
        Ok(catalog) => {
            info!(elements = catalog.len(), "catalog loaded");
            Ok(Rc::new(catalog))
        }
        Err(e) => {
            error!("catalog failed to load: {e}");
            Err(e.to_string())
        }
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    let config = use_hook(AppConfig::from_location);
    let loaded = use_hook(load_catalog);

    // Shared app state; tiles never read it, they get plain props
    use_context_provider(|| Signal::new(config.mode));
    use_context_provider(|| Signal::new(config.highlight.clone()));
    let catalog = use_context_provider(|| loaded.clone().unwrap_or_default());

    let css = use_hook(|| {
        let keys: Vec<String> = catalog.categories().iter().map(|c| type_key(c)).collect();
        styles::stylesheet(keys.iter().map(String::as_str))
    });

    if let Err(message) = loaded {
        return rsx! {
            div {
                id: "main",
                style: "padding: 40px; color: #fca5a5; font-family: system-ui, sans-serif;",
                h2 { "Element data unavailable" }
                p { "{message}" }
            }
        };
    }

    rsx! {
        style { "{css}" }
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    dioxus::launch(App);
}
