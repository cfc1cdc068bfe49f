//! Decorated call-to-action buttons
//!
//! - [`MagneticButton`]: drifts towards the pointer, springs back on leave
//! - [`GlowButton`]: radial glow fades in on hover
//! - [`BorderBeamButton`]: blurred gradient halo that brightens on hover

use leptos::ev::MouseEvent;
use leptos::html::Button;
use leptos::prelude::*;

use crate::core::{MagneticState, Offset};
use crate::ui::dom::{element_rect, now_ms, pointer};

use super::motion::FrameLoop;

/// Default colour of the [`GlowButton`] glow
pub const DEFAULT_GLOW: &str = "rgba(124, 58, 237, 0.5)";

/// CSS background of the glow layer
pub fn glow_background(color: &str) -> String {
    format!(
        "radial-gradient(circle at center, {} 0%, transparent 70%)",
        color
    )
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Button that follows the pointer while hovered
#[component]
pub fn MagneticButton(
    /// Button content
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `data-testid` of the button
    #[prop(optional)]
    test_id: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let node = NodeRef::<Button>::new();
    let state = StoredValue::new(MagneticState::new());
    let offset = RwSignal::new(Offset::ZERO);
    let frames = FrameLoop::new();

    let animate = move || {
        frames.start(move |now| {
            let Some((current, settled)) =
                state.try_update_value(|s| (s.tick(now), s.is_settled()))
            else {
                return false;
            };
            offset.set(current);
            !settled
        });
    };

    let on_move = move |ev: MouseEvent| {
        let Some(button) = node.get_untracked() else {
            return;
        };
        let rect = element_rect(&button);
        let at = pointer(&ev);
        state.update_value(|s| {
            s.pointer_move(at, rect, now_ms());
        });
        animate();
    };

    let on_leave = move |_: MouseEvent| {
        state.update_value(|s| s.pointer_leave(now_ms()));
        animate();
    };

    view! {
        <button
            node_ref=node
            class=class
            data-testid=test_id
            style=move || format!("transform: {};", offset.get().to_translate())
            on:mousemove=on_move
            on:mouseleave=on_leave
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Pill button with a hover glow
#[component]
pub fn GlowButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(optional)]
    test_id: Option<&'static str>,
    /// Glow colour (any CSS colour)
    #[prop(default = DEFAULT_GLOW.to_string(), into)]
    glow_color: String,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = join_class(
        "relative overflow-hidden rounded-full px-8 py-3 font-medium bg-[#7c3aed] text-white \
         transition-all duration-300 hover:shadow-[0_0_40px_rgba(124,58,237,0.5)] active:scale-95 group",
        &class,
    );
    let glow = format!("background: {};", glow_background(&glow_color));

    view! {
        <button
            class=classes
            data-testid=test_id
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class="relative z-10 flex items-center justify-center gap-2">
                {children()}
            </span>
            <div
                aria-hidden="true"
                class="absolute inset-0 opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                style=glow
            ></div>
        </button>
    }
}

/// Dark pill button inside a gradient halo
#[component]
pub fn BorderBeamButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(optional)]
    test_id: Option<&'static str>,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = join_class(
        "relative rounded-full px-8 py-3 font-medium bg-[#0a0a0f] text-white \
         border border-white/10 transition-all duration-300",
        &class,
    );

    view! {
        <div class="relative group">
            <div
                aria-hidden="true"
                class="absolute -inset-0.5 bg-gradient-to-r from-[#7c3aed] to-[#06b6d4] rounded-full blur opacity-30 group-hover:opacity-60 transition duration-500"
            ></div>
            <button
                class=classes
                data-testid=test_id
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_background_uses_color() {
        assert_eq!(
            glow_background(DEFAULT_GLOW),
            "radial-gradient(circle at center, rgba(124, 58, 237, 0.5) 0%, transparent 70%)"
        );
    }

    #[test]
    fn test_join_class() {
        assert_eq!(join_class("a b", ""), "a b");
        assert_eq!(join_class("a", "px-10"), "a px-10");
    }
}
