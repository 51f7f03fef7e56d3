//! Reverse proxy for the backend API.
//!
//! The client calls `/api/*` on its own origin. Each request is forwarded to
//! the configured backend with the same method, path and query, carrying only
//! the headers the backend's session handling needs.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Client;

/// Request headers passed through to the backend
const FORWARDED_REQUEST_HEADERS: &[header::HeaderName] =
    &[header::CONTENT_TYPE, header::COOKIE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("Proxy error: {}", self);
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({
                "success": false,
                "message": "Backend unavailable",
            })),
        )
            .into_response()
    }
}

/// Shared proxy state
#[derive(Clone)]
pub struct ProxyState {
    client: Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Result<Self, ProxyError> {
        // No cookie store: the visitor's own cookie is forwarded per request
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Backend URL for an incoming request URI (path and query kept verbatim)
    pub fn target_for(&self, uri: &Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", self.backend_url, path_and_query)
    }
}

/// Forward one `/api/*` request and relay the backend's answer.
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = state.target_for(&uri);
    tracing::debug!("Proxying {} {} -> {}", method, uri, target);

    let mut request = state.client.request(method, &target);
    for name in FORWARDED_REQUEST_HEADERS {
        for value in headers.get_all(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();

    let mut relayed = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        relayed.insert(header::CONTENT_TYPE, content_type.clone());
    }
    for cookie in upstream.headers().get_all(header::SET_COOKIE) {
        relayed.append(header::SET_COOKIE, cookie.clone());
    }
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    response.headers_mut().extend(relayed);
    Ok(response)
}
