//! Cursor policy.
//!
//! The context remembers the cursor state the host asked for and delegates the
//! actual work to a [`CursorBackend`]. Visibility uses a display counter in the
//! style of Win32 `ShowCursor`: the cursor shows while the counter is `>= 0`.
//! Other code in the process may bump that counter too, so the policy steps it
//! until it crosses the threshold instead of assuming one step is enough.

use crate::error::CursorError;

/// Upper bound on counter steps for one visibility change.
pub const MAX_DISPLAY_STEPS: u32 = 64;

/// Platform cursor primitives.
pub trait CursorBackend {
    /// Increment (`show == true`) or decrement the display counter and return
    /// the new value.
    fn adjust_display_count(&mut self, show: bool) -> i32;

    /// Confine the cursor to the host window, or release it.
    fn set_clip(&mut self, clip: bool) -> Result<(), CursorError>;

    /// Move the cursor to window-relative coordinates.
    fn warp(&mut self, x: i32, y: i32) -> Result<(), CursorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPolicy {
    visible: bool,
    clipped: bool,
}

impl CursorPolicy {
    pub const fn new() -> Self {
        Self {
            visible: true,
            clipped: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn clipped(&self) -> bool {
        self.clipped
    }

    /// Show or hide the cursor. Asking for the current state is a no-op and
    /// never reaches the backend.
    pub fn set_visible(
        &mut self,
        backend: &mut dyn CursorBackend,
        visible: bool,
    ) -> Result<(), CursorError> {
        if visible == self.visible {
            return Ok(());
        }

        let wanted = if visible { "visible" } else { "hidden" };
        for steps in 1..=MAX_DISPLAY_STEPS {
            let count = backend.adjust_display_count(visible);
            if (count >= 0) == visible {
                log::debug!("cursor {wanted} after {steps} step(s), counter {count}");
                self.visible = visible;
                return Ok(());
            }
        }

        log::warn!("cursor counter did not reach {wanted} state");
        Err(CursorError::Unresponsive {
            wanted,
            steps: MAX_DISPLAY_STEPS,
        })
    }

    /// Confine or release the cursor. The desired state only changes when the
    /// backend succeeds.
    pub fn set_clip(
        &mut self,
        backend: &mut dyn CursorBackend,
        clip: bool,
    ) -> Result<(), CursorError> {
        backend.set_clip(clip)?;
        self.clipped = clip;
        Ok(())
    }

    pub fn warp(
        &mut self,
        backend: &mut dyn CursorBackend,
        x: i32,
        y: i32,
    ) -> Result<(), CursorError> {
        backend.warp(x, y)
    }
}

impl Default for CursorPolicy {
    fn default() -> Self {
        Self::new()
    }
}
