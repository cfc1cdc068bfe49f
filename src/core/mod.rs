//! Core state and arithmetic behind the landing page effects
//!
//! Everything here is plain Rust with no DOM access; the `ui` layer owns the
//! signals and event listeners and delegates its decisions to these types.

pub mod animation;
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod demo;
pub mod geometry;
pub mod latch;
pub mod magnetic;
pub mod pattern;
pub mod slider;
#[cfg(test)]
mod tests;

pub use animation::{AnimatedValue, Animatable, Easing, SpringConfig, Transition};
pub use auth::{AuthCollaborator, GetStarted, Navigator, User, handle_get_started};
pub use counter::{CounterFormat, CounterState};
pub use demo::{DEMO_IMAGES, DemoError, DemoImage, DemoSelection};
pub use geometry::{Offset, Point, Rect};
pub use latch::{OnceLatch, Visibility};
pub use magnetic::MagneticState;
pub use slider::SliderPosition;
