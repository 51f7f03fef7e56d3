//! Test doubles for driving a [`Gate`] without a browser.
//!
//! Time only moves when a test calls [`Harness::advance`]. Every spawned task
//! runs on one `LocalPool`, which is drained after each clock step.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use roll_paradise::api::{
    AddToCartRequest, ApiReply, AuthStatus, CartInfo, CartReply, LoginRequest, SignupRequest,
    UserInfo,
};
use roll_paradise::gate::{
    Backend, Gate, GateError, GateTimings, GateView, Navigator, Notice, ParticleField, Platform,
    Presenter, SessionStore, TaskSpawner, Timer, Viewport,
};

// =============================================================================
// Clock and executor
// =============================================================================

#[derive(Default)]
struct ClockState {
    now: Duration,
    sleepers: Vec<(Duration, oneshot::Sender<()>)>,
}

/// Timer whose sleeps resolve only when the test advances time.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_sleepers(&self) -> usize {
        self.state.borrow().sleepers.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().sleepers.iter().map(|(d, _)| *d).min()
    }

    /// Move to `deadline` and wake everything due by then.
    pub fn fire_until(&self, deadline: Duration) {
        let due = {
            let mut state = self.state.borrow_mut();
            state.now = state.now.max(deadline);
            let now = state.now;
            let (due, pending): (Vec<_>, Vec<_>) =
                state.sleepers.drain(..).partition(|(d, _)| *d <= now);
            state.sleepers = pending;
            due
        };
        for (_, waker) in due {
            let _ = waker.send(());
        }
    }
}

#[async_trait(?Send)]
impl Timer for ManualClock {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            let deadline = state.now + duration;
            state.sleepers.push((deadline, tx));
        }
        let _ = rx.await;
    }
}

pub struct PoolSpawner(pub LocalSpawner);

impl TaskSpawner for PoolSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self.0
            .spawn_local(task)
            .expect("test pool should accept tasks");
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Scripted backend. Each endpoint returns its configured result and every
/// call is recorded.
pub struct FakeBackend {
    pub check_auth: RefCell<Result<AuthStatus, GateError>>,
    pub login: RefCell<Result<ApiReply, GateError>>,
    pub signup: RefCell<Result<ApiReply, GateError>>,
    pub logout: RefCell<Result<ApiReply, GateError>>,
    pub cart_info: RefCell<Result<CartInfo, GateError>>,
    pub add_to_cart: RefCell<Result<CartReply, GateError>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub last_login: RefCell<Option<LoginRequest>>,
    pub last_signup: RefCell<Option<SignupRequest>>,
    pub last_cart_add: RefCell<Option<AddToCartRequest>>,
    hold: RefCell<Option<oneshot::Receiver<()>>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            check_auth: RefCell::new(Ok(AuthStatus::default())),
            login: RefCell::new(Ok(ApiReply::ok())),
            signup: RefCell::new(Ok(ApiReply::ok())),
            logout: RefCell::new(Ok(ApiReply::ok())),
            cart_info: RefCell::new(Ok(CartInfo::default())),
            add_to_cart: RefCell::new(Ok(CartReply::default())),
            calls: RefCell::new(Vec::new()),
            last_login: RefCell::new(None),
            last_signup: RefCell::new(None),
            last_cart_add: RefCell::new(None),
            hold: RefCell::new(None),
        }
    }
}

impl FakeBackend {
    pub fn signed_in_as(&self, email: &str, name: &str) {
        *self.check_auth.borrow_mut() = Ok(AuthStatus {
            authenticated: true,
            user: Some(UserInfo {
                email: email.to_string(),
                name: Some(name.to_string()),
            }),
        });
    }

    /// The next call stays pending until the returned sender fires.
    pub fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }

    async fn enter(&self, endpoint: &'static str) {
        self.calls.borrow_mut().push(endpoint);
        let hold = self.hold.borrow_mut().take();
        if let Some(rx) = hold {
            let _ = rx.await;
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn check_auth(&self) -> Result<AuthStatus, GateError> {
        self.enter("check_auth").await;
        self.check_auth.borrow().clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<ApiReply, GateError> {
        *self.last_login.borrow_mut() = Some(request.clone());
        self.enter("login").await;
        self.login.borrow().clone()
    }

    async fn signup(&self, request: &SignupRequest) -> Result<ApiReply, GateError> {
        *self.last_signup.borrow_mut() = Some(request.clone());
        self.enter("signup").await;
        self.signup.borrow().clone()
    }

    async fn logout(&self) -> Result<ApiReply, GateError> {
        self.enter("logout").await;
        self.logout.borrow().clone()
    }

    async fn cart_info(&self) -> Result<CartInfo, GateError> {
        self.enter("cart_info").await;
        self.cart_info.borrow().clone()
    }

    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartReply, GateError> {
        *self.last_cart_add.borrow_mut() = Some(request.clone());
        self.enter("add_to_cart").await;
        self.add_to_cart.borrow().clone()
    }
}

// =============================================================================
// Page surface
// =============================================================================

#[derive(Default)]
pub struct FakeViewport {
    pub scroll_y: Cell<f64>,
    pub pinned_at: Cell<Option<f64>>,
    pub pin_calls: Cell<u32>,
    pub unpin_calls: Cell<u32>,
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn pin_body(&self, offset: f64) {
        self.pin_calls.set(self.pin_calls.get() + 1);
        self.pinned_at.set(Some(offset));
    }

    fn unpin_body(&self) {
        self.unpin_calls.set(self.unpin_calls.get() + 1);
        self.pinned_at.set(None);
    }

    fn scroll_to(&self, offset: f64) {
        self.scroll_y.set(offset);
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub entries: RefCell<std::collections::HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Assign(String),
    Reload,
}

pub struct FakeNavigator {
    pub url: RefCell<String>,
    pub history: RefCell<Vec<Navigation>>,
}

impl FakeNavigator {
    pub fn at(url: &str) -> Self {
        Self {
            url: RefCell::new(url.to_string()),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for FakeNavigator {
    fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    fn assign(&self, url: &str) {
        self.history
            .borrow_mut()
            .push(Navigation::Assign(url.to_string()));
    }

    fn reload(&self) {
        self.history.borrow_mut().push(Navigation::Reload);
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub views: RefCell<Vec<GateView>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingPresenter {
    pub fn last_view(&self) -> GateView {
        self.views.borrow().last().cloned().unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, view: &GateView) {
        self.views.borrow_mut().push(view.clone());
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

// =============================================================================
// Harness
// =============================================================================

pub const PAGE_URL: &str = "http://localhost:8080/";

pub struct Harness {
    pub pool: LocalPool,
    pub clock: ManualClock,
    pub backend: Rc<FakeBackend>,
    pub viewport: Rc<FakeViewport>,
    pub store: Rc<MemoryStore>,
    pub navigator: Rc<FakeNavigator>,
    pub presenter: Rc<RecordingPresenter>,
    pub gate: Rc<Gate>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_timings(GateTimings::default())
    }

    pub fn with_timings(timings: GateTimings) -> Self {
        let pool = LocalPool::new();
        let clock = ManualClock::default();
        let backend = Rc::new(FakeBackend::default());
        let viewport = Rc::new(FakeViewport::default());
        let store = Rc::new(MemoryStore::default());
        let navigator = Rc::new(FakeNavigator::at(PAGE_URL));
        let presenter = Rc::new(RecordingPresenter::default());

        let platform = Platform {
            backend: backend.clone(),
            timer: Rc::new(clock.clone()),
            spawner: Rc::new(PoolSpawner(pool.spawner())),
            viewport: viewport.clone(),
            store: store.clone(),
            navigator: navigator.clone(),
            presenter: presenter.clone(),
        };
        // Seeded so particle spawns are reproducible
        let particles = ParticleField::with_rng(StdRng::seed_from_u64(7));
        let gate = Gate::with_particles(platform, timings, particles);

        Self {
            pool,
            clock,
            backend,
            viewport,
            store,
            navigator,
            presenter,
            gate,
        }
    }

    /// A harness whose visitor already has a backend session, after load.
    pub fn signed_in() -> Self {
        let mut h = Self::new();
        h.backend.signed_in_as("meera@example.com", "Meera Nair");
        h.load();
        h
    }

    /// Page-load sequence: boot, then the auth check (and cart badge).
    pub fn load(&mut self) {
        self.gate.boot();
        let gate = self.gate.clone();
        self.spawn(async move { gate.load().await });
        self.settle();
    }

    /// Run `fut` on the pool; its output lands in the returned slot once it
    /// completes (possibly only after the clock advances).
    pub fn spawn<T: 'static>(&mut self, fut: impl Future<Output = T> + 'static) -> Rc<RefCell<Option<T>>> {
        let slot = Rc::new(RefCell::new(None));
        let out = slot.clone();
        self.pool
            .spawner()
            .spawn_local(async move {
                *out.borrow_mut() = Some(fut.await);
            })
            .expect("test pool should accept tasks");
        self.pool.run_until_stalled();
        slot
    }

    /// Drain ready work without moving time.
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
        self.clock.fire_until(self.clock.now());
        self.pool.run_until_stalled();
    }

    /// Move time forward, waking sleepers in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.clock.now() + by;
        self.pool.run_until_stalled();
        while let Some(deadline) = self.clock.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.fire_until(deadline);
            self.pool.run_until_stalled();
        }
        self.clock.fire_until(target);
        self.pool.run_until_stalled();
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    pub fn view(&self) -> GateView {
        self.gate.view()
    }

    pub fn intent(&self) -> Option<String> {
        self.store.get(roll_paradise::gate::redirect::REDIRECT_KEY)
    }
}
