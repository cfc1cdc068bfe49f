//! Divider position of the before/after comparison slider

use super::geometry::Rect;

/// Divider position as a percentage of the slider width, always in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f64);

impl SliderPosition {
    pub const CENTER: SliderPosition = SliderPosition(50.0);

    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::CENTER;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Position under a pointer at client x coordinate `client_x`
    pub fn from_pointer(client_x: f64, rect: Rect) -> Self {
        if rect.width <= 0.0 {
            return Self::CENTER;
        }
        Self::new((client_x - rect.left) / rect.width * 100.0)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// `clip-path` for the "after" layer: hide everything left of the divider
    pub fn after_clip_path(&self) -> String {
        format!("inset(0 0 0 {}%)", self.0)
    }

    /// CSS `left` for the divider handle
    pub fn handle_left(&self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_center() {
        assert_eq!(SliderPosition::default().percent(), 50.0);
    }

    #[test]
    fn test_from_pointer_inside() {
        let rect = Rect::new(100.0, 0.0, 400.0, 300.0);
        assert_eq!(SliderPosition::from_pointer(200.0, rect).percent(), 25.0);
        assert_eq!(SliderPosition::from_pointer(500.0, rect).percent(), 100.0);
    }

    #[test]
    fn test_from_pointer_clamps_outside() {
        let rect = Rect::new(100.0, 0.0, 400.0, 300.0);
        assert_eq!(SliderPosition::from_pointer(20.0, rect).percent(), 0.0);
        assert_eq!(SliderPosition::from_pointer(900.0, rect).percent(), 100.0);
    }

    #[test]
    fn test_drag_past_edges_pins_divider_then_returns() {
        let rect = Rect::new(100.0, 0.0, 400.0, 300.0);
        // Captured moves keep arriving after the pointer leaves the frame
        let path = [300.0, 450.0, 650.0, 1200.0, 400.0, -50.0, 200.0];
        let percents: Vec<f64> = path
            .iter()
            .map(|x| SliderPosition::from_pointer(*x, rect).percent())
            .collect();
        assert_eq!(percents, vec![50.0, 87.5, 100.0, 100.0, 75.0, 0.0, 25.0]);
    }

    #[test]
    fn test_zero_width_rect_falls_back_to_center() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(SliderPosition::from_pointer(10.0, rect), SliderPosition::CENTER);
    }

    #[test]
    fn test_nan_is_center() {
        assert_eq!(SliderPosition::new(f64::NAN), SliderPosition::CENTER);
    }

    #[test]
    fn test_css_helpers() {
        let position = SliderPosition::new(30.0);
        assert_eq!(position.after_clip_path(), "inset(0 0 0 30%)");
        assert_eq!(position.handle_left(), "30%");
    }
}
