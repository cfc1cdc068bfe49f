//! Magnetic hover effect
//!
//! A magnetic control drifts towards the pointer while the pointer moves over
//! it, proportionally to the pointer's distance from the control's center,
//! and springs back home when the pointer leaves.

use super::animation::{AnimatedValue, SpringConfig, Transition};
use super::geometry::{Offset, Point, Rect};

/// Fraction of the pointer-to-center distance the control follows
pub const MAGNETIC_STRENGTH: f64 = 0.15;

/// Spring used to chase the pointer
pub const MAGNETIC_SPRING: SpringConfig = SpringConfig::new(150.0, 15.0, 0.1);

/// Displacement for a pointer at `pointer` over a control occupying `rect`
pub fn magnetic_offset(pointer: Point, rect: Rect) -> Offset {
    (pointer - rect.center()) * MAGNETIC_STRENGTH
}

/// Per-instance state of a magnetic control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticState {
    offset: AnimatedValue<Offset>,
}

impl MagneticState {
    pub fn new() -> Self {
        Self {
            offset: AnimatedValue::new(Offset::ZERO, Transition::spring(MAGNETIC_SPRING)),
        }
    }

    /// Retarget towards the pointer; returns the new target offset
    pub fn pointer_move(&mut self, pointer: Point, rect: Rect, now: f64) -> Offset {
        let target = magnetic_offset(pointer, rect);
        self.offset.set_target(target, now);
        target
    }

    /// Send the control back to rest, reversing any motion in flight
    pub fn pointer_leave(&mut self, now: f64) {
        self.offset.set_target(Offset::ZERO, now);
    }

    /// Offset the control is currently heading to
    pub fn target(&self) -> Offset {
        self.offset.target()
    }

    /// Offset to render this frame
    pub fn tick(&mut self, now: f64) -> Offset {
        self.offset.tick(now)
    }

    pub fn current(&self) -> Offset {
        self.offset.value()
    }

    pub fn is_settled(&self) -> bool {
        self.offset.is_settled()
    }
}

impl Default for MagneticState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect::new(100.0, 200.0, 160.0, 48.0)
    }

    #[test]
    fn test_offset_at_center_is_zero() {
        let rect = button();
        assert_eq!(magnetic_offset(rect.center(), rect), Offset::ZERO);
    }

    #[test]
    fn test_offset_is_scaled_distance_from_center() {
        let rect = button();
        // center is (180, 224)
        let offset = magnetic_offset(Point::new(260.0, 200.0), rect);
        assert!((offset.x - 12.0).abs() < 1e-9);
        assert!((offset.y - -3.6).abs() < 1e-9);
    }

    #[test]
    fn test_offset_formula_across_bounds() {
        let rect = button();
        let center = rect.center();
        for step_x in 0..=8 {
            for step_y in 0..=4 {
                let pointer = Point::new(
                    rect.left + rect.width * step_x as f64 / 8.0,
                    rect.top + rect.height * step_y as f64 / 4.0,
                );
                let offset = magnetic_offset(pointer, rect);
                assert!((offset.x - (pointer.x - center.x) * 0.15).abs() < 1e-9);
                assert!((offset.y - (pointer.y - center.y) * 0.15).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_pointer_move_sets_target() {
        let mut state = MagneticState::new();
        let target = state.pointer_move(Point::new(100.0, 200.0), button(), 0.0);

        assert_eq!(state.target(), target);
        assert!(!state.is_settled());
    }

    #[test]
    fn test_pointer_leave_resets_target() {
        let mut state = MagneticState::new();
        state.pointer_move(Point::new(250.0, 240.0), button(), 0.0);
        state.tick(16.0);

        state.pointer_leave(16.0);
        assert_eq!(state.target(), Offset::ZERO);

        let mut now = 16.0;
        while !state.is_settled() && now < 10_000.0 {
            now += 16.0;
            state.tick(now);
        }
        assert_eq!(state.current(), Offset::ZERO);
    }

    #[test]
    fn test_leave_without_move_stays_at_rest() {
        let mut state = MagneticState::default();
        state.pointer_leave(0.0);
        assert!(state.is_settled());
        assert_eq!(state.tick(16.0), Offset::ZERO);
    }

    #[test]
    fn test_latest_pointer_wins() {
        let mut state = MagneticState::new();
        let rect = button();
        state.pointer_move(Point::new(100.0, 200.0), rect, 0.0);
        state.pointer_move(Point::new(120.0, 210.0), rect, 4.0);
        let last = state.pointer_move(Point::new(240.0, 230.0), rect, 8.0);

        assert_eq!(state.target(), last);
    }
}
