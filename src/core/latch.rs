//! One-way visibility latch for "reveal once" viewport triggers

/// Visibility of a reveal-once region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// A latch that can only move from [`Visibility::Hidden`] to [`Visibility::Shown`].
///
/// Scrolling a region out of view never resets it; re-entering the viewport
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnceLatch {
    state: Visibility,
}

impl OnceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a viewport entry.
    ///
    /// Returns `true` only for the call that performed the
    /// `Hidden -> Shown` transition.
    pub fn fire(&mut self) -> bool {
        match self.state {
            Visibility::Hidden => {
                self.state = Visibility::Shown;
                tracing::trace!("reveal latch fired");
                true
            }
            Visibility::Shown => false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == Visibility::Shown
    }
}
