//! Category legend - click a category to dim everything else

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::element::type_key;

/// Next highlight after clicking `key`: a second click clears it
pub fn toggle_highlight(current: Option<&str>, key: &str) -> Option<String> {
    if current == Some(key) { None } else { Some(key.to_string()) }
}

#[component]
pub fn Legend(categories: Vec<String>, highlight: Signal<Option<String>>) -> Element {
    let selected = highlight.read().clone();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 20px; max-width: 1200px; justify-content: center;",

            for category in categories.iter() {
                {
                    let key = type_key(category);
                    let pressed = selected.as_deref() == Some(key.as_str());
                    let outline = if pressed { "2px solid #e5e7eb" } else { "2px solid transparent" };
                    let name = category.clone();
                    let click_key = key.clone();
                    let mut highlight = highlight;

                    rsx! {
                        button {
                            key: "{key}",
                            class: "{key}-bg",
                            "aria-pressed": if pressed { "true" } else { "false" },
                            style: "padding: 6px 12px; border: none; outline: {outline}; border-radius: 4px; color: #111; font-size: 13px; cursor: pointer;",
                            onclick: move |_| {
                                let next = toggle_highlight(highlight.peek().as_deref(), &click_key);
                                info!(highlight = ?next, "legend selection");
                                highlight.set(next);
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
