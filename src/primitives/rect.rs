//! Rect - axis-aligned box in window (client) pixel coordinates

/// Bounding box as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Client rect of the DOM element with the given id
    pub fn of_element(id: &str) -> Option<Self> {
        let el = web_sys::window()?.document()?.get_element_by_id(id)?;
        let r = el.get_bounding_client_rect();
        Some(Self::new(r.x(), r.y(), r.width(), r.height()))
    }

    /// Current window size as a rect at the origin
    pub fn window() -> Option<Self> {
        let w = web_sys::window()?;
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some(Self::new(0.0, 0.0, width, height))
    }

    pub fn to_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }

    pub fn describe(&self) -> String {
        format!(
            "({},{} {}x{})",
            self.x as i32, self.y as i32,
            self.w as i32, self.h as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn css_and_describe() {
        let r = Rect::new(12.5, 8.0, 60.0, 70.0);
        assert_eq!(r.to_css(), "left: 12.5px; top: 8px;");
        assert_eq!(r.describe(), "(12,8 60x70)");
    }
}
