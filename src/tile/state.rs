//! TileState - local interaction state of one tile
//!
//! Three independent cells. Messages go through `update`, which is pure:
//! the component only stores whatever it returns.

use std::fmt;

use crate::element::{Glyph, MatterState};
use crate::primitives::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileState {
    pub popover_open: bool,
    /// Where the popover hangs from; only set while hovered
    pub anchor: Option<Rect>,
    pub icon: Option<Glyph>,
}

/// Everything that can change a tile's local state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileMsg {
    /// Click toggles, independent of hover
    Click,
    /// Pointer entered; carries the tile's client rect
    PointerEnter(Rect),
    PointerLeave,
    /// Dismissed from the popover side (Escape)
    Close,
    /// The element record was replaced by the parent
    ElementChanged(Option<MatterState>),
}

impl TileState {
    pub fn new(state: Option<MatterState>) -> Self {
        Self {
            icon: Glyph::for_state(state),
            ..Self::default()
        }
    }

    pub fn update(self, msg: TileMsg) -> Self {
        match msg {
            TileMsg::Click => Self {
                popover_open: !self.popover_open,
                ..self
            },
            TileMsg::PointerEnter(anchor) => Self {
                popover_open: true,
                anchor: Some(anchor),
                ..self
            },
            TileMsg::PointerLeave | TileMsg::Close => Self {
                popover_open: false,
                anchor: None,
                ..self
            },
            TileMsg::ElementChanged(state) => Self {
                icon: Glyph::for_state(state),
                ..self
            },
        }
    }
}

impl fmt::Display for TileMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click => write!(f, "click"),
            Self::PointerEnter(r) => write!(f, "enter {}", r.describe()),
            Self::PointerLeave => write!(f, "leave"),
            Self::Close => write!(f, "close"),
            Self::ElementChanged(Some(s)) => write!(f, "element changed ({s})"),
            Self::ElementChanged(None) => write!(f, "element changed"),
        }
    }
}
