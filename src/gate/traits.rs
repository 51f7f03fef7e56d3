use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::api::{
    AddToCartRequest, ApiReply, AuthStatus, CartInfo, CartReply, LoginRequest, SignupRequest,
};
use crate::gate::{GateError, GateView, Notice};

// =============================================================================
// Backend - the external auth/cart API
// =============================================================================

/// Client for the backend endpoints.
///
/// Implementations return `Err(GateError::Transport)` for network and parse
/// failures and `Ok(reply)` for anything the backend answered, including
/// `success: false`. Callers map rejections themselves.
#[async_trait(?Send)]
pub trait Backend {
    async fn check_auth(&self) -> Result<AuthStatus, GateError>;

    async fn login(&self, request: &LoginRequest) -> Result<ApiReply, GateError>;

    async fn signup(&self, request: &SignupRequest) -> Result<ApiReply, GateError>;

    async fn logout(&self) -> Result<ApiReply, GateError>;

    async fn cart_info(&self) -> Result<CartInfo, GateError>;

    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartReply, GateError>;
}

// =============================================================================
// Scheduling
// =============================================================================

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Runs detached work on the (single) event loop.
pub trait TaskSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

// =============================================================================
// Page surface
// =============================================================================

/// Vertical scroll position and body pinning.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Fix the body in place, offset so the visible content does not move.
    fn pin_body(&self, offset: f64);

    fn unpin_body(&self);

    fn scroll_to(&self, offset: f64);
}

/// String-keyed store that survives a reload but not a new browser session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

pub trait Navigator {
    fn current_url(&self) -> String;

    /// Full document navigation to `url`.
    fn assign(&self, url: &str);

    fn reload(&self);
}

/// Receives render snapshots and transient notices.
pub trait Presenter {
    fn present(&self, view: &GateView);

    fn notify(&self, notice: Notice);
}
