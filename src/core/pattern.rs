//! Geometry for the decorative backgrounds: grid and dot tiles, sparkles

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

pub const DEFAULT_GRID_SIZE: f64 = 40.0;

/// Dot pattern tile edge (user-space units)
pub const DOT_TILE_SIZE: f64 = 16.0;

/// Slowest sparkle speed accepted; smaller values are clamped
const MIN_SPARKLE_SPEED: f64 = 0.05;

/// SVG path for one grid tile: the top edge and the left edge
pub fn grid_path(width: f64, height: f64) -> String {
    format!("M{} 0L0 0 0 {}", width, height)
}

/// Unique `<pattern>` id so several backgrounds can share a page
pub fn pattern_id(kind: &str) -> String {
    format!("{}-pattern-{}", kind, Uuid::new_v4().simple())
}

/// `fill` reference to a pattern id
pub fn pattern_fill(id: &str) -> String {
    format!("url(#{})", id)
}

/// A single twinkling particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Horizontal position, percent of the container width
    pub x: f64,
    /// Vertical position, percent of the container height
    pub y: f64,
    pub radius: f64,
    /// Twinkle start offset (seconds)
    pub delay_s: f64,
    /// Length of one twinkle cycle (seconds)
    pub duration_s: f64,
}

/// Generate `density` particles of base radius `size`.
///
/// The same seed always yields the same field, so server-rendered markup
/// matches the hydrated page.
pub fn sparkle_field(density: usize, size: f64, speed: f64, seed: u64) -> Vec<Sparkle> {
    let speed = speed.max(MIN_SPARKLE_SPEED);
    let mut rng = StdRng::seed_from_u64(seed);

    (0..density)
        .map(|_| {
            let duration_s = rng.gen_range(2.0..4.0) / speed;
            Sparkle {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                radius: size * rng.gen_range(0.4..1.0),
                delay_s: rng.gen_range(0.0..duration_s),
                duration_s,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_path_default_tile() {
        assert_eq!(
            grid_path(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE),
            "M40 0L0 0 0 40"
        );
    }

    #[test]
    fn test_grid_path_rectangular_tile() {
        assert_eq!(grid_path(60.0, 20.5), "M60 0L0 0 0 20.5");
    }

    #[test]
    fn test_pattern_ids_are_unique() {
        let first = pattern_id("grid");
        let second = pattern_id("grid");

        assert!(first.starts_with("grid-pattern-"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_pattern_fill() {
        assert_eq!(pattern_fill("dot-pattern-1"), "url(#dot-pattern-1)");
    }

    #[test]
    fn test_sparkle_field_is_deterministic() {
        let a = sparkle_field(25, 1.5, 0.5, 7);
        let b = sparkle_field(25, 1.5, 0.5, 7);
        assert_eq!(a, b);

        let c = sparkle_field(25, 1.5, 0.5, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sparkle_field_density_and_bounds() {
        let field = sparkle_field(100, 2.0, 0.3, 1);
        assert_eq!(field.len(), 100);

        for sparkle in &field {
            assert!((0.0..100.0).contains(&sparkle.x));
            assert!((0.0..100.0).contains(&sparkle.y));
            assert!(sparkle.radius >= 0.8 && sparkle.radius < 2.0);
            assert!(sparkle.delay_s < sparkle.duration_s);
        }
    }

    #[test]
    fn test_faster_sparkles_twinkle_quicker() {
        let slow = sparkle_field(1, 1.0, 0.25, 3);
        let fast = sparkle_field(1, 1.0, 1.0, 3);
        assert!(fast[0].duration_s < slow[0].duration_s);
    }

    #[test]
    fn test_non_positive_speed_is_clamped() {
        let field = sparkle_field(5, 1.0, 0.0, 3);
        assert!(field.iter().all(|s| s.duration_s.is_finite()));
    }
}
