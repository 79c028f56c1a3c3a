//! Popover - detail panel for one element
//!
//! Floating popovers are fixed-positioned next to their anchor so they escape
//! the table grid. The same panel renders inline on the element page.

use dioxus::prelude::*;

use crate::primitives::Rect;

use super::view::{PointsView, PopoverView};

/// Width is fixed; height is an upper estimate used for edge flipping
pub const PANEL_W: f64 = 280.0;
pub const PANEL_H: f64 = 260.0;

/// Where a panel of `panel` size goes when hung off `anchor`.
///
/// Default placement puts the panel's top-left at the anchor's top-right.
/// Panels that would leave the window on the right flip to the anchor's left
/// side; panels that would leave it at the bottom slide up.
pub fn place_popover(anchor: Rect, panel: (f64, f64), window: Rect) -> Rect {
    let (w, h) = panel;
    let left = if anchor.right() + w > window.right() {
        (anchor.x - w).max(window.x)
    } else {
        anchor.right()
    };
    let top = if anchor.y + h > window.bottom() {
        (window.bottom() - h).max(window.y)
    } else {
        anchor.y
    };
    Rect::new(left, top, w, h)
}

#[component]
pub fn Popover(view: PopoverView, floating: bool) -> Element {
    let panel_style = match (floating, view.anchor) {
        (true, Some(anchor)) => {
            let window = Rect::window().unwrap_or(Rect::new(0.0, 0.0, f64::MAX, f64::MAX));
            let placed = place_popover(anchor, (PANEL_W, PANEL_H), window);
            format!("position: fixed; {} width: {PANEL_W}px; z-index: 1000; pointer-events: none;", placed.to_css())
        }
        // Opened without a known anchor: hang below the tile
        (true, None) => format!("position: absolute; left: 0; top: 100%; width: {PANEL_W}px; z-index: 1000; pointer-events: none;"),
        (false, _) => format!("width: {PANEL_W}px;"),
    };

    let header_class = view.header_class.clone();
    let title = view.title.clone();

    rsx! {
        div {
            class: "popover-paper",
            role: "dialog",
            style: "{panel_style}",

            div {
                class: "{header_class}",
                h6 { class: "popover-header", "{title}" }
            }

            div {
                class: "popover-content",
                table {
                    tbody {
                        for row in view.rows.iter() {
                            {
                                let label = row.label.clone();
                                let value = row.value.clone();
                                let value_class = row.value_class.clone();

                                rsx! {
                                    tr {
                                        key: "{label}",
                                        class: "popover-item",
                                        td { class: "popover-label", "{label}" }
                                        td { class: "{value_class}", "{value}" }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(points) = view.points.clone() {
                    PointsRow { points }
                }
            }
        }
    }
}

#[component]
fn PointsRow(points: PointsView) -> Element {
    let melting_svg = PointsView::MELTING_GLYPH.svg();
    let boiling_svg = PointsView::BOILING_GLYPH.svg();
    let icon_class = points.icon_class.clone();

    rsx! {
        div {
            class: "popover-points",
            div {
                class: "popover-point",
                if let Some(melting) = points.melting.as_ref() {
                    span { class: "{icon_class}", title: "Melting point", dangerous_inner_html: "{melting_svg}" }
                    " "
                    span { "{melting}" }
                }
            }
            div {
                class: "popover-point",
                if let Some(boiling) = points.boiling.as_ref() {
                    span { class: "{icon_class}", title: "Boiling point", dangerous_inner_html: "{boiling_svg}" }
                    " "
                    span { "{boiling}" }
                }
            }
        }
    }
}
