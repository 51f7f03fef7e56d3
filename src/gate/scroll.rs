//! Scroll capture/restore around modal dialogs.

use crate::gate::traits::Viewport;

/// Holds the scroll offset captured when the body was pinned.
#[derive(Debug, Default)]
pub struct ScrollLock {
    anchor: Option<f64>,
}

impl ScrollLock {
    pub fn is_held(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<f64> {
        self.anchor
    }

    /// Capture the current offset and pin the body.
    ///
    /// While an anchor is held the body is already pinned and `scroll_y`
    /// reads 0, so a second acquire keeps the original anchor.
    pub fn acquire(&mut self, viewport: &dyn Viewport) {
        if let Some(held) = self.anchor {
            tracing::debug!("Scroll lock already held at {}px", held);
            return;
        }
        let offset = viewport.scroll_y();
        self.anchor = Some(offset);
        viewport.pin_body(offset);
        tracing::debug!("Scroll lock acquired at {}px", offset);
    }

    /// Unpin the body and return to the captured offset. No-op when not held.
    pub fn release(&mut self, viewport: &dyn Viewport) {
        let Some(offset) = self.anchor.take() else {
            return;
        };
        viewport.unpin_body();
        viewport.scroll_to(offset);
        tracing::debug!("Scroll lock released, restored {}px", offset);
    }
}
