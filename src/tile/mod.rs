//! Element tile: local state, pure view tree, and the Dioxus components

mod component;
mod popover;
mod state;
mod view;

pub use component::ElementTile;
pub use popover::Popover;
pub use view::build_popover;
