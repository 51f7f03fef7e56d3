//! Browser-side client for the backend API.
//!
//! Requests go to the same origin, so the backend's session cookie is sent
//! automatically. Outside the browser every call fails with a transport
//! error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{
    self, AddToCartRequest, ApiReply, AuthStatus, CartInfo, CartReply, LoginRequest,
    SignupRequest,
};
use crate::gate::{Backend, GateError};

/// [`Backend`] implementation over `window.fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn check_auth(&self) -> Result<AuthStatus, GateError> {
        fetch_json(api::CHECK_AUTH).await.map_err(GateError::Transport)
    }

    async fn login(&self, request: &LoginRequest) -> Result<ApiReply, GateError> {
        post_json(api::LOGIN, request)
            .await
            .map_err(GateError::Transport)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<ApiReply, GateError> {
        post_json(api::SIGNUP, request)
            .await
            .map_err(GateError::Transport)
    }

    async fn logout(&self) -> Result<ApiReply, GateError> {
        post_json(api::LOGOUT, &serde_json::json!({}))
            .await
            .map_err(GateError::Transport)
    }

    async fn cart_info(&self) -> Result<CartInfo, GateError> {
        fetch_json(api::CART_INFO).await.map_err(GateError::Transport)
    }

    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartReply, GateError> {
        post_json(api::ADD_TO_CART, request)
            .await
            .map_err(GateError::Transport)
    }
}

// =============================================================================
// Client-side fetch helpers
// =============================================================================

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, String> {
    use web_sys::{Request, RequestInit};

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    send(request).await
}

/// SSR stub - returns error (should not be called outside the browser)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, String> {
    Err("fetch_json is only available in browser".to_string())
}

/// POST JSON to a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    use web_sys::{Headers, Request, RequestInit};

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let body_str = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    send(request).await
}

/// SSR stub - returns error (should not be called outside the browser)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    _url: &str,
    _body: &T,
) -> Result<R, String> {
    Err("post_json is only available in browser".to_string())
}

#[cfg(target_arch = "wasm32")]
async fn send<R: for<'de> Deserialize<'de>>(request: web_sys::Request) -> Result<R, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or("No window")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}
