//! Animated values
//!
//! A single abstraction for every value on the page that moves over time:
//! the counter digits, the magnetic button offset and the spotlight fade.
//!
//! An [`AnimatedValue`] knows where it is (`current`), where it is going
//! (`target`) and how to get there (a [`Transition`]). The view layer feeds it
//! timestamps from the animation-frame clock and renders whatever [`tick`]
//! returns. Retargeting an in-flight animation starts from the current value,
//! so rapid updates simply chase the latest input.
//!
//! # Example
//!
//! ```
//! use flipcut::core::animation::{AnimatedValue, Transition, EASE_OUT};
//!
//! let mut value = AnimatedValue::new(0.0, Transition::tween(500.0, EASE_OUT));
//! value.set_target(100.0, 0.0);
//!
//! let halfway = value.tick(250.0);
//! assert!(halfway > 50.0 && halfway < 100.0);
//!
//! assert_eq!(value.tick(500.0), 100.0);
//! assert!(value.is_settled());
//! ```
//!
//! [`tick`]: AnimatedValue::tick

use std::ops::{Add, Mul, Sub};

use super::geometry::Offset;

/// Spring integration step (milliseconds)
const SPRING_STEP_MS: f64 = 1.0;

/// Longest gap between two ticks that is simulated; a backgrounded tab
/// resumes from here instead of replaying minutes of physics
const MAX_FRAME_GAP_MS: f64 = 1000.0;

/// Values that can be interpolated and driven by a spring
pub trait Animatable:
    Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    fn zero() -> Self;

    /// Distance from zero, used for the spring rest thresholds
    fn magnitude(self) -> f64;

    fn lerp(self, to: Self, progress: f64) -> Self {
        self + (to - self) * progress
    }
}

impl Animatable for f64 {
    fn zero() -> Self {
        0.0
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Animatable for Offset {
    fn zero() -> Self {
        Offset::ZERO
    }

    fn magnitude(self) -> f64 {
        self.length()
    }
}

/// Timing curve for tweens
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2)
    CubicBezier(f64, f64, f64, f64),
}

/// CSS `ease-out`
pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => progress,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_bezier_parameter(progress, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`
fn solve_bezier_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    // Newton first, it converges in a handful of steps for sane curves
    let mut s = x;
    for _ in 0..8 {
        let error = bezier(s, x1, x2) - x;
        if error.abs() < 1e-7 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    // Bisection fallback for flat regions
    let (mut low, mut high) = (0.0, 1.0);
    s = x;
    for _ in 0..32 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

/// Physical parameters of a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may settle
    pub rest_delta: f64,
    /// Speed (units per second) under which the spring may settle
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.1,
        }
    }
}

/// How an [`AnimatedValue`] travels to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Fixed-duration interpolation
    Tween { duration_ms: f64, easing: Easing },
    /// Physics-driven; duration depends on distance and spring parameters
    Spring(SpringConfig),
}

impl Transition {
    pub const fn tween(duration_ms: f64, easing: Easing) -> Self {
        Transition::Tween {
            duration_ms,
            easing,
        }
    }

    pub const fn spring(config: SpringConfig) -> Self {
        Transition::Spring(config)
    }
}

/// A value that moves towards a target over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue<T> {
    current: T,
    target: T,
    from: T,
    velocity: T,
    transition: Transition,
    started_at: Option<f64>,
    last_tick: Option<f64>,
}

impl<T: Animatable> AnimatedValue<T> {
    /// Create a settled value
    pub fn new(initial: T, transition: Transition) -> Self {
        Self {
            current: initial,
            target: initial,
            from: initial,
            velocity: T::zero(),
            transition,
            started_at: None,
            last_tick: None,
        }
    }

    /// The value to render right now
    pub fn value(&self) -> T {
        self.current
    }

    /// The value the animation is heading to
    pub fn target(&self) -> T {
        self.target
    }

    /// Whether the animation has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Point the animation at a new target, starting from the current value.
    ///
    /// Re-issuing the target that is already in flight is a no-op, so a
    /// tween is not restarted by duplicate updates.
    pub fn set_target(&mut self, target: T, now: f64) {
        if target == self.target {
            return;
        }

        self.from = self.current;
        self.target = target;
        self.started_at = Some(now);
        self.last_tick = Some(now);

        // Retargeting onto the current value settles it, so no speed may linger
        if self.is_settled() {
            self.finish();
        }
    }

    /// Advance the animation to `now` (milliseconds) and return the new value
    pub fn tick(&mut self, now: f64) -> T {
        if self.is_settled() {
            return self.current;
        }

        match self.transition {
            Transition::Tween {
                duration_ms,
                easing,
            } => {
                let started = *self.started_at.get_or_insert(now);
                let elapsed = (now - started).max(0.0);

                if duration_ms <= 0.0 || elapsed >= duration_ms {
                    self.finish();
                } else {
                    let progress = easing.apply(elapsed / duration_ms);
                    self.current = self.from.lerp(self.target, progress);
                }
            }
            Transition::Spring(config) => {
                let last = self.last_tick.unwrap_or(now);
                let mut remaining = (now - last).clamp(0.0, MAX_FRAME_GAP_MS);

                while remaining > 0.0 && !self.is_settled() {
                    let step = remaining.min(SPRING_STEP_MS);
                    self.step_spring(&config, step / 1000.0);
                    remaining -= step;
                }

                self.last_tick = Some(now);
            }
        }

        self.current
    }

    /// One semi-implicit Euler step of `dt` seconds
    fn step_spring(&mut self, config: &SpringConfig, dt: f64) {
        let displacement = self.current - self.target;
        let spring_force = displacement * -config.stiffness;
        let damping_force = self.velocity * -config.damping;
        let acceleration = (spring_force + damping_force) * (1.0 / config.mass);

        self.velocity = self.velocity + acceleration * dt;
        self.current = self.current + self.velocity * dt;

        let at_rest = (self.current - self.target).magnitude() < config.rest_delta
            && self.velocity.magnitude() < config.rest_speed;
        if at_rest {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.from = self.target;
        self.velocity = T::zero();
    }
}
