//! Host server routes: the `/api` proxy plus the static client bundle.

use std::path::Path;

use axum::{routing::any, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::proxy::{self, ProxyState};

/// Build the application router.
///
/// Anything that is not `/api/*` and not a file in `public_dir` is answered
/// with `index.html`, so client routes survive a reload.
pub fn router(state: ProxyState, public_dir: &Path) -> Router {
    let index = public_dir.join("index.html");
    let bundle = ServeDir::new(public_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .fallback_service(bundle)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app(dir: &Path) -> Router {
        std::fs::write(dir.join("index.html"), "<p>index</p>").unwrap();
        // Nothing listens on port 1
        router(ProxyState::new("http://127.0.0.1:1").unwrap(), dir)
    }

    #[tokio::test]
    async fn client_route_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(Request::builder().uri("/customize").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_without_backend_is_bad_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn every_client_endpoint_reaches_the_proxy() {
        use crate::api;

        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let endpoints = [
            ("GET", api::CHECK_AUTH),
            ("POST", api::LOGIN),
            ("POST", api::SIGNUP),
            ("POST", api::LOGOUT),
            ("GET", api::CART_INFO),
            ("POST", api::ADD_TO_CART),
        ];

        for (method, endpoint) in endpoints {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(endpoint)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            // The bundle would answer 200 with index.html
            assert_eq!(
                response.status(),
                StatusCode::BAD_GATEWAY,
                "{} {} was not proxied",
                method,
                endpoint
            );
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["message"], "Backend unavailable");
        }
    }
}
