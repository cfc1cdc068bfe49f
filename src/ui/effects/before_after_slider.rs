use leptos::ev::PointerEvent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::core::SliderPosition;
use crate::ui::dom::{element_rect, pointer};
use crate::ui::icon::{Icon, icons};

/// Two images stacked under a draggable divider.
///
/// "Before" shows left of the divider, "after" right of it. Swapping the
/// images keeps the divider where the user left it.
#[component]
pub fn BeforeAfterSlider(
    #[prop(into)]
    before_image: Signal<String>,
    #[prop(into)]
    after_image: Signal<String>,
    #[prop(default = "Before".to_string(), into)]
    before_label: String,
    #[prop(default = "After".to_string(), into)]
    after_label: String,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    let position = RwSignal::new(SliderPosition::default());
    let dragging = RwSignal::new(false);

    let move_divider = move |ev: &PointerEvent| {
        if let Some(el) = frame.get_untracked() {
            let rect = element_rect(&el);
            position.set(SliderPosition::from_pointer(pointer(ev).x, rect));
        }
    };

    let before_alt = before_label.clone();
    let after_alt = after_label.clone();

    view! {
        <div
            node_ref=frame
            class=format!(
                "relative aspect-[4/3] w-full select-none overflow-hidden rounded-2xl cursor-ew-resize {}",
                class,
            )
            style="touch-action: none;"
            data-testid="before-after-slider"
            on:pointerdown=move |ev| {
                // Keep receiving moves while the pointer is outside the frame
                if let Some(el) = frame.get_untracked() {
                    if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                        leptos::logging::warn!("pointer capture failed: {:?}", e);
                    }
                }
                dragging.set(true);
                move_divider(&ev);
            }
            on:pointermove=move |ev| {
                if dragging.get_untracked() {
                    move_divider(&ev);
                }
            }
            on:pointerup=move |_| dragging.set(false)
            on:pointercancel=move |_| dragging.set(false)
        >
            <img
                src=move || before_image.get()
                alt=before_alt
                class="absolute inset-0 h-full w-full object-cover"
                draggable="false"
            />
            <img
                src=move || after_image.get()
                alt=after_alt
                class="absolute inset-0 h-full w-full object-cover checkerboard"
                style=move || format!("clip-path: {};", position.get().after_clip_path())
                draggable="false"
            />

            <span class="absolute top-4 left-4 rounded-full bg-black/60 px-3 py-1 text-xs font-medium text-white">
                {before_label}
            </span>
            <span class="absolute top-4 right-4 rounded-full bg-[#7c3aed]/80 px-3 py-1 text-xs font-medium text-white">
                {after_label}
            </span>

            <div
                class="absolute inset-y-0 w-0.5 -translate-x-1/2 bg-white shadow-[0_0_12px_rgba(0,0,0,0.5)]"
                style=move || format!("left: {};", position.get().handle_left())
            >
                <div class="absolute top-1/2 left-1/2 flex h-10 w-10 -translate-x-1/2 -translate-y-1/2 items-center justify-center rounded-full bg-white text-zinc-900 shadow-lg">
                    <Icon name=icons::MOVE_HORIZONTAL class="w-5 h-5" />
                </div>
            </div>
        </div>
    }
}
