//! Opacity - the active/inactive tile treatment

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const ACTIVE: Self = Self::new(1.0);
    pub const INACTIVE: Self = Self::new(0.25);

    /// Exactly two treatments: active or dimmed
    pub const fn for_active(is_active: bool) -> Self {
        if is_active { Self::ACTIVE } else { Self::INACTIVE }
    }

    pub fn to_css(&self) -> String {
        format!("opacity: {};", self.0)
    }

    pub fn describe(&self) -> &'static str {
        if self.0 >= 1.0 { "active" } else { "inactive" }
    }
}
