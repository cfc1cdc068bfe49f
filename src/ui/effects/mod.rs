//! Visual effect components used across the marketing pages

mod animated_buttons;
mod animated_counter;
mod before_after_slider;
mod grid_pattern;
pub mod motion;
pub mod reveal;
mod sparkles;
mod spotlight_card;
mod styles;

pub use animated_buttons::{
    BorderBeamButton, DEFAULT_GLOW, GlowButton, MagneticButton, glow_background,
};
pub use animated_counter::AnimatedCounter;
pub use before_after_slider::BeforeAfterSlider;
pub use grid_pattern::{DotPattern, GridPattern};
pub use motion::FrameLoop;
pub use reveal::{Reveal, RevealFrom, use_reveal_once};
pub use sparkles::Sparkles;
pub use spotlight_card::{SpotlightCard, spotlight_background};
pub use styles::EffectStyles;
