//! Sign-in modal state machine.
//!
//! `closed → opening → open → closing → closed`. Opening and closing are
//! split into a synchronous request and a delayed completion; the caller
//! sleeps for the animation time in between. Each request bumps an epoch
//! and a completion only applies if its epoch is still current, so a
//! reopen during `closing` cancels the pending close.

use crate::gate::effects::AnimationPause;
use crate::gate::scroll::ScrollLock;
use crate::gate::traits::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl ModalVisibility {
    /// Whether the overlay is on screen
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalVisibility::Closed)
    }

    /// Whether the modal is the active dialog (dismissal applies)
    pub fn is_active(&self) -> bool {
        matches!(self, ModalVisibility::Opening | ModalVisibility::Open)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalAnimation {
    #[default]
    None,
    SlideIn,
    SlideOut,
}

impl ModalAnimation {
    pub fn css(&self) -> &'static str {
        match self {
            ModalAnimation::None => "",
            ModalAnimation::SlideIn => "modalSlideIn 0.4s cubic-bezier(0.4, 0, 0.2, 1) forwards",
            ModalAnimation::SlideOut => "modalSlideOut 0.3s cubic-bezier(0.4, 0, 0.2, 1) forwards",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Signup => "signup",
        }
    }
}

/// Ticket for a pending delayed completion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct ModalController {
    visibility: ModalVisibility,
    animation: ModalAnimation,
    tab: AuthTab,
    /// The page-level `modal-open` marker
    body_marked: bool,
    epoch: u64,
    scroll: ScrollLock,
    pause: AnimationPause,
}

impl ModalController {
    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn animation(&self) -> ModalAnimation {
        self.animation
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn body_marked(&self) -> bool {
        self.body_marked
    }

    pub fn pause(&self) -> AnimationPause {
        self.pause
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }

    /// Begin opening. `None` if already opening or open.
    pub fn request_open(&mut self, viewport: &dyn Viewport) -> Option<Transition> {
        if self.visibility.is_active() {
            return None;
        }
        // From `closing` the lock and pause are still engaged; acquire keeps
        // the existing anchor
        self.visibility = ModalVisibility::Opening;
        self.animation = ModalAnimation::None;
        self.body_marked = true;
        self.scroll.acquire(viewport);
        self.pause.pause();
        self.epoch += 1;
        tracing::debug!("Modal opening (epoch {})", self.epoch);
        Some(Transition { epoch: self.epoch })
    }

    /// Finish opening after the entrance delay. Returns whether it applied.
    pub fn finish_open(&mut self, transition: Transition) -> bool {
        if transition.epoch != self.epoch || self.visibility != ModalVisibility::Opening {
            return false;
        }
        self.visibility = ModalVisibility::Open;
        self.animation = ModalAnimation::SlideIn;
        tracing::debug!("Modal open");
        true
    }

    /// Begin closing. `None` if already closing or closed.
    pub fn request_close(&mut self) -> Option<Transition> {
        if !self.visibility.is_active() {
            return None;
        }
        self.visibility = ModalVisibility::Closing;
        self.animation = ModalAnimation::SlideOut;
        self.epoch += 1;
        tracing::debug!("Modal closing (epoch {})", self.epoch);
        Some(Transition { epoch: self.epoch })
    }

    /// Finish closing after the exit animation. Returns whether it applied.
    pub fn finish_close(&mut self, transition: Transition, viewport: &dyn Viewport) -> bool {
        if transition.epoch != self.epoch || self.visibility != ModalVisibility::Closing {
            return false;
        }
        self.body_marked = false;
        self.scroll.release(viewport);
        self.pause.resume();
        self.visibility = ModalVisibility::Closed;
        self.animation = ModalAnimation::None;
        tracing::debug!("Modal closed");
        true
    }

    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
    }
}
