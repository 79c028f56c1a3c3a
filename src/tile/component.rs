//! ElementTile - clickable/hoverable cell for one element
//!
//! Structure:
//!   container div
//!     button (identity id, pointer + key handlers)
//!       body span (category background, group/period placement, treatment)
//!         number + phase glyph, symbol, name, display value
//!     popover (only while open, a sibling of the button)
//!
//! Handlers turn DOM events into `TileMsg`s; `TileState::update` decides the
//! next state and `build_tile` turns it back into a tree. `TileFrame` only
//! draws a `TileView`, it holds no state.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::element::ElementRecord;
use crate::primitives::Rect;

use super::popover::Popover;
use super::state::{TileMsg, TileState};
use super::view::{TileView, build_tile};

#[component]
pub fn ElementTile(element: ElementRecord, display_label: String) -> Element {
    let mut tile = use_signal(|| TileState::new(element.state));

    let symbol = element.symbol.clone();
    let dispatch = use_callback(move |msg: TileMsg| {
        let next = tile.peek().update(msg);
        debug!(symbol = %symbol, %msg, open = next.popover_open, "tile transition");
        tile.set(next);
    });

    // The parent may hand over a different record under the same key
    use_effect(use_reactive((&element.state,), move |(phase,)| {
        dispatch(TileMsg::ElementChanged(phase));
    }));

    let view = build_tile(&element, &tile.read(), &display_label);

    rsx! {
        TileFrame { view, on_msg: dispatch }
    }
}

#[component]
pub fn TileFrame(view: TileView, on_msg: EventHandler<TileMsg>) -> Element {
    let id = view.id.clone();
    let body_class = view.body_class.clone();
    let atomic_number = view.atomic_number.clone();
    let symbol = view.symbol.clone();
    let atomic_name = view.atomic_name.clone();
    let display_value = view.display_value.clone();
    let icon_svg = view.icon.map(|g| g.svg());
    let icon_name = view.icon.map(|g| g.name()).unwrap_or_default();
    let expanded = if view.popover.is_some() { "true" } else { "false" };
    let popover = view.popover.clone();

    let enter_id = id.clone();

    rsx! {
        div {
            class: "element-tile",

            button {
                id: "{id}",
                class: "tile-button",
                "aria-expanded": "{expanded}",
                "aria-label": "{atomic_name}",
                onclick: move |_| on_msg(TileMsg::Click),
                onmouseenter: move |_| {
                    let anchor = Rect::of_element(&enter_id).unwrap_or_default();
                    on_msg(TileMsg::PointerEnter(anchor));
                },
                onmouseleave: move |_| on_msg(TileMsg::PointerLeave),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        on_msg(TileMsg::Close);
                    }
                },

                // Phrasing content only inside the button
                span {
                    class: "{body_class}",

                    span {
                        class: "tile-info",
                        span {
                            class: "tile-number",
                            span { "{atomic_number}" }
                            if let Some(svg) = icon_svg {
                                span {
                                    class: "tile-state",
                                    title: "{icon_name}",
                                    dangerous_inner_html: "{svg}",
                                }
                            }
                        }
                        span { class: "tile-symbol", "{symbol}" }
                        span { class: "tile-name", "{atomic_name}" }
                        span { class: "tile-value", "{display_value}" }
                    }
                }
            }

            if let Some(view) = popover {
                Popover { view, floating: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{MatterState, Reading};

    #[component]
    fn Frame(view: TileView) -> Element {
        rsx! {
            TileFrame { view, on_msg: move |_| {} }
        }
    }

    fn render(view: TileView) -> String {
        let mut dom = VirtualDom::new_with_props(Frame, FrameProps { view });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn helium() -> ElementRecord {
        ElementRecord {
            category: "Noble Gas".into(),
            group: 18,
            period: 1,
            symbol: "He".into(),
            atomic_number: 2,
            atomic_name: "Helium".into(),
            display_value: "4.0026".into(),
            state: Some(MatterState::Gas),
            melting_point: Some(Reading::Number(0.95)),
            melting_point_converted: Some("-272.2 °C".into()),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn closed_tile_markup() {
        let he = helium();
        let html = render(build_tile(&he, &TileState::new(he.state), "Atomic Mass (u)"));
        assert!(html.contains(r#"class="element-tile""#));
        assert!(html.contains(r#"id="Popover-He""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("popover-paper"));
    }

    #[test]
    fn open_popover_is_a_sibling_of_the_button() {
        let he = helium();
        let state = TileState::new(he.state).update(TileMsg::Click);
        let html = render(build_tile(&he, &state, "Atomic Mass (u)"));

        let button_start = html.find("<button").unwrap();
        let button_end = html.find("</button>").unwrap();
        let panel = html.find("popover-paper").unwrap();
        assert!(panel > button_end);
        assert!(html.contains(r#"aria-expanded="true""#));

        let button = &html[button_start..button_end];
        for tag in ["<div", "<table", "<h6"] {
            assert!(!button.contains(tag), "{tag} inside button");
        }
    }
}
