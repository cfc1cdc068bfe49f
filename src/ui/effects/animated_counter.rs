use leptos::prelude::*;

use crate::core::{CounterFormat, CounterState};
use crate::ui::dom::now_ms;

use super::motion::FrameLoop;

/// Number that eases to each new `value` over half a second.
///
/// Renders `from` until hydrated, then animates to the current value. A new
/// value arriving mid-animation retargets from wherever the number is.
#[component]
pub fn AnimatedCounter(
    /// Value to count to
    #[prop(into)]
    value: Signal<f64>,
    /// Text before the number
    #[prop(optional, into)]
    prefix: String,
    /// Text after the number
    #[prop(optional, into)]
    suffix: String,
    #[prop(optional, into)]
    class: String,
    #[prop(optional)]
    format: CounterFormat,
    /// Starting value
    #[prop(optional)]
    from: f64,
) -> impl IntoView {
    let state = StoredValue::new(CounterState::new(from, format));
    let text = RwSignal::new(format.format(from));
    let frames = FrameLoop::new();

    Effect::new(move |_| {
        let target = value.get();
        state.update_value(|s| s.set_value(target, now_ms()));

        frames.start(move |now| {
            let Some((display, settled)) = state.try_update_value(|s| {
                s.tick(now);
                (s.display(), s.is_settled())
            }) else {
                return false;
            };
            text.set(display);
            !settled
        });
    });

    view! {
        <span class=format!("tabular-nums {}", class)>
            {prefix}
            {move || text.get()}
            {suffix}
        </span>
    }
}
