//! Element page - deep link to a single element, details shown inline

use std::rc::Rc;

use dioxus::prelude::*;

use crate::Route;
use crate::display::DisplayMode;
use crate::element::Catalog;
use crate::table::project;
use crate::tile::{ElementTile, Popover, build_popover};

#[component]
pub fn ElementPage(symbol: String) -> Element {
    let catalog = use_context::<Rc<Catalog>>();
    let mode = use_context::<Signal<DisplayMode>>();

    let label = mode().label();
    let record = catalog.get(&symbol).map(|entry| project(entry, mode(), None));

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; padding: 20px;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
                Link {
                    to: Route::PeriodicTable {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Table"
                }
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "{symbol}"
                }
            }

            match record {
                Some(record) => {
                    let details = build_popover(&record, &label, None);
                    rsx! {
                        div {
                            style: "display: flex; gap: 24px; align-items: flex-start;",
                            div {
                                style: "width: 96px;",
                                ElementTile { element: record, display_label: label.clone() }
                            }
                            Popover { view: details, floating: false }
                        }
                    }
                }
                None => rsx! {
                    p {
                        style: "color: #9ca3af; font-size: 14px;",
                        "No element with symbol \u{201c}{symbol}\u{201d}."
                    }
                },
            }
        }
    }
}
