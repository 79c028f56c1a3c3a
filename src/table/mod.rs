//! Periodic table page - lays tiles out by group and period
//!
//! Owns nothing the tiles care about: it projects catalog entries for the
//! current display mode and hands each tile its record and the mode label.

mod legend;
mod projection;

pub use projection::{project, project_all};

use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::display::DisplayMode;
use crate::element::Catalog;
use crate::tile::ElementTile;
use legend::Legend;

#[component]
pub fn PeriodicTable() -> Element {
    let catalog = use_context::<Rc<Catalog>>();
    let mut mode = use_context::<Signal<DisplayMode>>();
    let highlight = use_context::<Signal<Option<String>>>();

    let current = mode();
    let label = current.label();
    let records = project_all(catalog.iter(), current, highlight.read().as_deref());
    let categories = catalog.categories();

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; padding: 20px;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Periodic Table"
                }
                label {
                    style: "color: #9ca3af; font-size: 14px; display: flex; gap: 8px; align-items: center;",
                    "Show"
                    select {
                        style: "padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px;",
                        onchange: move |evt: FormEvent| {
                            match evt.value().parse::<DisplayMode>() {
                                Ok(next) => {
                                    info!(mode = %next, "display mode changed");
                                    mode.set(next);
                                }
                                Err(e) => warn!("ignoring selection: {e}"),
                            }
                        },
                        for m in DisplayMode::ALL.iter().copied() {
                            {
                                let slug = m.slug();
                                let name = m.name();

                                rsx! {
                                    option {
                                        key: "{slug}",
                                        value: "{slug}",
                                        selected: m == current,
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "periodic-table",
                for record in records {
                    {
                        let symbol = record.symbol.clone();
                        let cell_class = format!("cell group-{} period-{}", record.group, record.period);

                        rsx! {
                            div {
                                key: "{symbol}",
                                class: "{cell_class}",
                                ElementTile { element: record, display_label: label.clone() }
                            }
                        }
                    }
                }
            }

            Legend { categories, highlight }
        }
    }
}
