//! Thin browser helpers shared by the effect components
//!
//! Server builds get inert stand-ins: nothing here runs before hydration.

use leptos::ev::MouseEvent;
use leptos::web_sys;

use crate::core::{Point, Rect};

/// Milliseconds on the clock used by every animation
pub fn now_ms() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::now()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Pointer position of a mouse or pointer event, in client pixels
pub fn pointer(ev: &MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Current bounding box of `element`
pub fn element_rect(element: &web_sys::Element) -> Rect {
    #[cfg(not(feature = "ssr"))]
    {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = element;
        Rect::default()
    }
}

/// Smooth-scroll the element with `id` into view, if present
pub fn scroll_to_id(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}

/// Send the browser to `href` with a full page load
pub fn redirect(href: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::error!("failed to redirect to {}: {:?}", href, e);
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = href;
    }
}

/// Run `step` once per animation frame, passing [`now_ms`], until it returns `false`
pub fn run_frames<F>(step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        fn schedule(mut step: Box<dyn FnMut(f64) -> bool>) {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(window) = web_sys::window() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                if step(now_ms()) {
                    schedule(step);
                }
            });
            let _ = window.request_animation_frame(callback.unchecked_ref());
        }

        schedule(Box::new(step));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = step;
    }
}
