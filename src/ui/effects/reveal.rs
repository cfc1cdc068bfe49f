//! Viewport-triggered reveal animations
//!
//! Each revealed block owns a [`OnceLatch`] fed by an `IntersectionObserver`.
//! The observer disconnects after the first entry, so blocks stay revealed
//! when they scroll away again.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::OnceLatch;

/// Fraction of the element that must be visible to count as an entry
#[cfg(not(feature = "ssr"))]
const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so elements reveal slightly after they appear
#[cfg(not(feature = "ssr"))]
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Live observer and the callback it calls into
#[cfg(not(feature = "ssr"))]
type RevealObserver = (
    leptos::web_sys::IntersectionObserver,
    leptos::wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, leptos::web_sys::IntersectionObserver),
    >,
);

/// Latch that fires the first time the element behind `target` enters the viewport.
///
/// The observer is disconnected and its callback freed when the calling
/// component unmounts, whether or not the element was ever seen.
pub fn use_reveal_once(target: NodeRef<Div>) -> RwSignal<OnceLatch> {
    let latch = RwSignal::new(OnceLatch::new());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
        use leptos::web_sys;

        let observer = StoredValue::new_local(None::<RevealObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if latch.get_untracked().is_shown() || observer.with_value(|o| o.is_some()) {
                return;
            }

            let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let entered = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<web_sys::IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if entered {
                        latch.maybe_update(|l| l.fire());
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            match web_sys::IntersectionObserver::new_with_options(
                on_intersect.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(created) => {
                    created.observe(&element);
                    observer.set_value(Some((created, on_intersect)));
                }
                Err(e) => {
                    // Without observer support, reveal immediately
                    leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                    latch.maybe_update(|l| l.fire());
                }
            }
        });

        on_cleanup(move || {
            if let Some((created, on_intersect)) = observer.try_update_value(|o| o.take()).flatten() {
                created.disconnect();
                drop(on_intersect);
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = target;
    }

    latch
}

/// Direction a block slides in from when revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Fade only, no movement
    Nowhere,
}

impl RevealFrom {
    pub fn class(&self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal reveal-up",
            RevealFrom::Left => "reveal reveal-left",
            RevealFrom::Right => "reveal reveal-right",
            RevealFrom::Nowhere => "reveal",
        }
    }
}

/// Wrapper that fades/slides its children in on first viewport entry
#[component]
pub fn Reveal(
    /// Slide direction
    #[prop(optional)]
    from: RevealFrom,
    /// Delay before the transition starts (seconds)
    #[prop(optional)]
    delay: f64,
    /// Transition duration (seconds)
    #[prop(default = 0.6)]
    duration: f64,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let latch = use_reveal_once(node);

    let class = format!("{} {}", from.class(), class);
    let timing = format!("transition-duration: {}s; transition-delay: {}s;", duration, delay);

    view! {
        <div
            node_ref=node
            class=class
            class:revealed=move || latch.get().is_shown()
            style=timing
        >
            {children()}
        </div>
    }
}
