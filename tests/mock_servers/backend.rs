//! Mock storefront backend
//!
//! Implements the six JSON endpoints the client uses, with a cookie-based
//! session, plus `/api/echo` which reflects what the proxy forwarded.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
struct MockUser {
    full_name: String,
    password: String,
}

#[derive(Default)]
struct MockBackendState {
    users: HashMap<String, MockUser>,
    /// session token -> email
    sessions: HashMap<String, String>,
    cart_count: u32,
    cart_total: f64,
    next_session: u64,
}

impl MockBackendState {
    fn session_user(&self, headers: &HeaderMap) -> Option<String> {
        let token = session_token(headers)?;
        self.sessions.get(&token).cloned()
    }

    fn open_session(&mut self, email: &str) -> String {
        self.next_session += 1;
        let token = format!("tok{}", self.next_session);
        self.sessions.insert(token.clone(), email.to_string());
        token
    }
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

type Shared = Arc<RwLock<MockBackendState>>;

/// Mock backend server
pub struct MockBackend {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Start a mock backend on a random port
    pub async fn start() -> Self {
        let state: Shared = Arc::new(RwLock::new(MockBackendState::default()));

        let app = Router::new()
            .route("/api/check-auth", get(check_auth))
            .route("/api/login", post(login))
            .route("/api/signup", post(signup))
            .route("/api/logout", post(logout))
            .route("/api/get_cart_info", get(cart_info))
            .route("/api/add_to_cart", post(add_to_cart))
            .route("/api/echo", any(echo))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Get the server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register a user that can log in
    pub async fn add_user(&self, email: &str, full_name: &str, password: &str) {
        let mut state = self.state.write().await;
        state.users.insert(
            email.to_string(),
            MockUser {
                full_name: full_name.to_string(),
                password: password.to_string(),
            },
        );
    }

    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

fn with_session(body: Value, token: &str) -> Response {
    (
        [(
            header::SET_COOKIE,
            format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, token),
        )],
        Json(body),
    )
        .into_response()
}

async fn check_auth(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    let state = state.read().await;
    match state.session_user(&headers) {
        Some(email) => {
            let name = state
                .users
                .get(&email)
                .map(|u| u.full_name.clone())
                .unwrap_or_else(|| "User".to_string());
            Json(json!({"authenticated": true, "user": {"email": email, "name": name}}))
        }
        None => Json(json!({"authenticated": false})),
    }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginBody>) -> Response {
    let mut state = state.write().await;
    let user = state.users.get(&body.email).cloned();
    match user {
        Some(user) if user.password == body.password => {
            let token = state.open_session(&body.email);
            with_session(
                json!({"success": true, "message": "Login successful", "user_name": user.full_name}),
                &token,
            )
        }
        _ => Json(json!({"success": false, "message": "Invalid email or password."}))
            .into_response(),
    }
}

#[derive(Deserialize)]
struct SignupBody {
    full_name: String,
    email: String,
    #[allow(dead_code)]
    phone: String,
    password: String,
}

async fn signup(State(state): State<Shared>, Json(body): Json<SignupBody>) -> Response {
    let mut state = state.write().await;
    if state.users.contains_key(&body.email) {
        return Json(json!({"success": false, "message": "Email already registered"}))
            .into_response();
    }
    state.users.insert(
        body.email.clone(),
        MockUser {
            full_name: body.full_name,
            password: body.password,
        },
    );
    let token = state.open_session(&body.email);
    with_session(json!({"success": true, "message": "Account created"}), &token)
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    let mut state = state.write().await;
    if let Some(token) = session_token(&headers) {
        state.sessions.remove(&token);
    }
    Json(json!({"success": true}))
}

async fn cart_info(State(state): State<Shared>) -> Json<Value> {
    let state = state.read().await;
    Json(json!({"cart_count": state.cart_count, "cart_total": state.cart_total}))
}

#[derive(Deserialize)]
struct AddToCartBody {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    quantity: u32,
}

async fn add_to_cart(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<AddToCartBody>,
) -> Response {
    let mut state = state.write().await;
    if state.session_user(&headers).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Please sign in first"})),
        )
            .into_response();
    }
    if body.kind != "roll" && body.kind != "side" && body.kind != "drink" {
        return Json(json!({"success": false, "message": "Unknown item type"})).into_response();
    }
    state.cart_count += body.quantity;
    state.cart_total += 100.0 * f64::from(body.quantity);
    Json(json!({
        "success": true,
        "message": format!("Item {} added to cart", body.id),
        "cart_count": state.cart_count,
        "cart_total": state.cart_total,
    }))
    .into_response()
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    let header = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "cookie": header(header::COOKIE),
        "content_type": header(header::CONTENT_TYPE),
        "authorization": header(header::AUTHORIZATION),
        "body": body,
    }))
}
