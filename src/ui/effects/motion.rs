use leptos::prelude::*;

use crate::ui::dom::run_frames;

/// Animation-frame loop owned by one component.
///
/// Starting a loop that is already running is a no-op: the running loop
/// keeps ticking the component's state and picks up any new target on its
/// next frame.
#[derive(Clone, Copy)]
pub struct FrameLoop {
    running: StoredValue<bool>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: StoredValue::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.try_get_value().unwrap_or(false)
    }

    /// Call `step` every frame until it returns `false`
    pub fn start<F>(&self, mut step: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        if self.is_running() {
            return;
        }
        self.running.set_value(true);

        let running = self.running;
        run_frames(move |now| {
            let keep_going = step(now);
            if !keep_going {
                running.try_update_value(|r| *r = false);
            }
            keep_going
        });
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
