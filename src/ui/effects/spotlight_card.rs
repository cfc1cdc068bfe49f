use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{AnimatedValue, Easing, Point, Transition};
use crate::ui::dom::{element_rect, now_ms, pointer};

use super::motion::FrameLoop;

/// Fade time of the spotlight overlay
const SPOTLIGHT_FADE_MS: f64 = 200.0;

const DEFAULT_SPOTLIGHT: &str = "rgba(124, 58, 237, 0.15)";

/// Overlay background lit around `at` (card-local pixels)
pub fn spotlight_background(at: Point, color: &str) -> String {
    format!(
        "radial-gradient(600px circle at {}px {}px, {}, transparent 40%)",
        at.x, at.y, color
    )
}

/// Glass card with a soft light following the pointer
#[component]
pub fn SpotlightCard(
    children: Children,
    /// Light colour
    #[prop(default = DEFAULT_SPOTLIGHT.to_string(), into)]
    spotlight_color: String,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let position = RwSignal::new(Point::new(0.0, 0.0));
    let opacity = RwSignal::new(0.0);
    let fade = StoredValue::new(AnimatedValue::new(
        0.0,
        Transition::tween(SPOTLIGHT_FADE_MS, Easing::Linear),
    ));
    let frames = FrameLoop::new();

    let fade_to = move |target: f64| {
        fade.update_value(|f| f.set_target(target, now_ms()));
        frames.start(move |now| {
            let Some((value, settled)) = fade.try_update_value(|f| (f.tick(now), f.is_settled()))
            else {
                return false;
            };
            opacity.set(value);
            !settled
        });
    };

    let on_move = move |ev: MouseEvent| {
        if let Some(card) = node.get_untracked() {
            position.set(element_rect(&card).local(pointer(&ev)));
        }
    };

    view! {
        <div
            node_ref=node
            class=format!(
                "relative overflow-hidden rounded-2xl border border-white/10 bg-white/5 p-8 backdrop-blur-sm {}",
                class,
            )
            on:mousemove=on_move
            on:mouseenter=move |_| fade_to(1.0)
            on:mouseleave=move |_| fade_to(0.0)
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute -inset-px"
                style=move || {
                    format!(
                        "opacity: {}; background: {};",
                        opacity.get(),
                        spotlight_background(position.get(), &spotlight_color),
                    )
                }
            ></div>
            <div class="relative">{children()}</div>
        </div>
    }
}
