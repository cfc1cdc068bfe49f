use leptos::prelude::*;

use crate::core::pattern::sparkle_field;

/// Field of twinkling particles filling the parent.
///
/// Particle placement comes from `seed`, so the server and the browser
/// render the same field.
#[component]
pub fn Sparkles(
    /// Base particle radius (px)
    #[prop(default = 1.0)]
    size: f64,
    /// Number of particles
    #[prop(default = 60)]
    density: usize,
    /// Twinkle speed multiplier; higher is faster
    #[prop(default = 1.0)]
    speed: f64,
    /// Peak particle opacity
    #[prop(default = 1.0)]
    opacity: f64,
    /// Particle fill
    #[prop(default = "#ffffff".to_string(), into)]
    color: String,
    #[prop(default = 7)]
    seed: u64,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let particles = sparkle_field(density, size, speed, seed);
    let style = format!("--sparkle-opacity: {};", opacity);

    view! {
        <svg
            aria-hidden="true"
            class=format!("pointer-events-none absolute inset-0 h-full w-full {}", class)
            style=style
        >
            {particles
                .into_iter()
                .map(|p| {
                    let timing = format!(
                        "animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        p.delay_s,
                        p.duration_s,
                    );
                    view! {
                        <circle
                            class="sparkle"
                            cx=format!("{:.2}%", p.x)
                            cy=format!("{:.2}%", p.y)
                            r=format!("{:.2}", p.radius)
                            fill=color.clone()
                            style=timing
                        />
                    }
                })
                .collect_view()}
        </svg>
    }
}
