//! Sign-in gate for the Roll Paradise storefront.
//!
//! The [`Gate`] owns every piece of client state that matters for gating:
//! the cached auth flag, the modal state machine (with its scroll lock and
//! animation pause flag), the submit buttons, the cart badge and the
//! decorative particle field. It never touches the DOM. Effects go out
//! through the traits in [`traits`], and after each change the presenter
//! receives a [`GateView`] snapshot to render from.
//!
//! Everything runs on one thread. Borrows of the inner cells are never held
//! across an `.await`.

pub mod auth;
pub mod cart;
pub mod effects;
mod error;
pub mod forms;
pub mod interceptor;
pub mod modal;
pub mod notice;
pub mod redirect;
pub mod scroll;
pub mod traits;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;

use crate::api::{AddToCartRequest, ApiReply, CartReply, ItemKind};

pub use auth::{AuthAffordances, AuthState};
pub use cart::CartSummary;
pub use effects::{AnimationPause, Particle, ParticleField, ScrollEffects};
pub use error::{GateError, ValidationError};
pub use forms::{LoginForm, SignupForm, SubmitControl, SubmitKind};
pub use interceptor::{Affordance, GateDecision};
pub use modal::{AuthTab, ModalAnimation, ModalController, ModalVisibility};
pub use notice::{Notice, NoticeKind};
pub use redirect::RedirectIntent;
pub use scroll::ScrollLock;
pub use traits::{Backend, Navigator, Presenter, SessionStore, TaskSpawner, Timer, Viewport};

/// Fixed durations of the time-gated transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateTimings {
    /// Between `opening` and the slide-in animation
    pub entrance_delay: Duration,
    /// Length of the slide-out animation
    pub exit_duration: Duration,
    /// After a successful sign-in, before redirecting
    pub post_auth_delay: Duration,
    pub particle_interval: Duration,
    pub notice_lifetime: Duration,
}

impl Default for GateTimings {
    fn default() -> Self {
        Self {
            entrance_delay: Duration::from_millis(50),
            exit_duration: Duration::from_millis(300),
            post_auth_delay: Duration::from_millis(1000),
            particle_interval: Duration::from_millis(2000),
            notice_lifetime: Duration::from_millis(4000),
        }
    }
}

/// Everything the gate needs from its host environment.
#[derive(Clone)]
pub struct Platform {
    pub backend: Rc<dyn Backend>,
    pub timer: Rc<dyn Timer>,
    pub spawner: Rc<dyn TaskSpawner>,
    pub viewport: Rc<dyn Viewport>,
    pub store: Rc<dyn SessionStore>,
    pub navigator: Rc<dyn Navigator>,
    pub presenter: Rc<dyn Presenter>,
}

/// Render snapshot handed to the presenter.
#[derive(Clone, Debug, PartialEq)]
pub struct GateView {
    pub modal: ModalVisibility,
    pub animation: ModalAnimation,
    pub tab: AuthTab,
    /// The page-level `modal-open` marker
    pub body_locked: bool,
    pub affordances: AuthAffordances,
    pub user_name: Option<String>,
    pub login_control: SubmitControl,
    pub signup_control: SubmitControl,
    pub cart: CartSummary,
    pub scroll_effects: ScrollEffects,
    pub animations_paused: bool,
    pub particles: Vec<Particle>,
}

impl Default for GateView {
    fn default() -> Self {
        Self {
            modal: ModalVisibility::Closed,
            animation: ModalAnimation::None,
            tab: AuthTab::Login,
            body_locked: false,
            affordances: AuthAffordances::default(),
            user_name: None,
            login_control: SubmitControl::idle(SubmitKind::Login),
            signup_control: SubmitControl::idle(SubmitKind::Signup),
            cart: CartSummary::default(),
            scroll_effects: ScrollEffects::default(),
            animations_paused: false,
            particles: Vec::new(),
        }
    }
}

pub struct Gate {
    platform: Platform,
    timings: GateTimings,
    auth: RefCell<AuthState>,
    modal: RefCell<ModalController>,
    login_control: Cell<SubmitControl>,
    signup_control: Cell<SubmitControl>,
    cart: Cell<CartSummary>,
    scroll_effects: Cell<ScrollEffects>,
    particles: RefCell<ParticleField>,
}

impl Gate {
    pub fn new(platform: Platform, timings: GateTimings) -> Rc<Self> {
        Self::with_particles(platform, timings, ParticleField::new())
    }

    pub fn with_particles(
        platform: Platform,
        timings: GateTimings,
        particles: ParticleField,
    ) -> Rc<Self> {
        Rc::new(Self {
            platform,
            timings,
            auth: RefCell::new(AuthState::default()),
            modal: RefCell::new(ModalController::default()),
            login_control: Cell::new(SubmitControl::idle(SubmitKind::Login)),
            signup_control: Cell::new(SubmitControl::idle(SubmitKind::Signup)),
            cart: Cell::new(CartSummary::default()),
            scroll_effects: Cell::new(ScrollEffects::default()),
            particles: RefCell::new(particles),
        })
    }

    pub fn timings(&self) -> GateTimings {
        self.timings
    }

    pub fn view(&self) -> GateView {
        let auth = self.auth.borrow();
        let modal = self.modal.borrow();
        GateView {
            modal: modal.visibility(),
            animation: modal.animation(),
            tab: modal.tab(),
            body_locked: modal.body_marked(),
            affordances: auth.affordances(),
            user_name: auth.display_name(),
            login_control: self.login_control.get(),
            signup_control: self.signup_control.get(),
            cart: self.cart.get(),
            scroll_effects: self.scroll_effects.get(),
            animations_paused: modal.pause().is_paused(),
            particles: self.particles.borrow().particles().to_vec(),
        }
    }

    fn render(&self) {
        let view = self.view();
        self.platform.presenter.present(&view);
    }

    fn notify(&self, notice: Notice) {
        self.platform.presenter.notify(notice);
    }

    // =========================================================================
    // Page lifecycle
    // =========================================================================

    /// Synchronous page-load setup: first render and the particle spawner.
    pub fn boot(self: &Rc<Self>) {
        self.render();
        self.start_particles();
    }

    /// Asynchronous page-load setup: auth check, then the cart badge for
    /// signed-in visitors.
    pub async fn load(self: &Rc<Self>) {
        if self.refresh_auth().await {
            self.refresh_cart().await;
        }
    }

    // =========================================================================
    // Auth state
    // =========================================================================

    /// Re-query the backend. Any failure leaves the visitor signed out.
    pub async fn refresh_auth(&self) -> bool {
        let status = match self.platform.backend.check_auth().await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!("Auth check failed, treating visitor as signed out: {}", e);
                None
            }
        };
        self.auth.borrow_mut().apply_check(status);
        self.render();
        let authenticated = self.is_authenticated();
        tracing::debug!("Auth refreshed: authenticated={}", authenticated);
        authenticated
    }

    /// Cached read; never waits on the network.
    pub fn is_authenticated(&self) -> bool {
        self.auth.borrow().is_authenticated()
    }

    // =========================================================================
    // Gate interceptor
    // =========================================================================

    /// Decide a click on `affordance`. Must be called synchronously from the
    /// click handler; on `Intercept` the handler prevents the default action.
    pub fn intercept(self: &Rc<Self>, affordance: &Affordance<'_>) -> GateDecision {
        if !affordance.is_protected() || self.is_authenticated() {
            return GateDecision::Allow;
        }
        let current = self.platform.navigator.current_url();
        let target = interceptor::redirect_target(affordance.href, &current);
        RedirectIntent::record(&*self.platform.store, &target);
        self.open_modal();
        tracing::debug!("Gated click towards {}", target);
        GateDecision::Intercept { target }
    }

    // =========================================================================
    // Modal
    // =========================================================================

    pub fn open_modal(self: &Rc<Self>) {
        let transition = self
            .modal
            .borrow_mut()
            .request_open(&*self.platform.viewport);
        let Some(transition) = transition else {
            return;
        };
        self.halt_particles();
        self.render();

        let gate = Rc::clone(self);
        self.spawn(async move {
            gate.platform.timer.sleep(gate.timings.entrance_delay).await;
            let applied = gate.modal.borrow_mut().finish_open(transition);
            if applied {
                gate.render();
            }
        });
    }

    pub fn close_modal(self: &Rc<Self>) {
        let transition = self.modal.borrow_mut().request_close();
        let Some(transition) = transition else {
            return;
        };
        self.render();

        let gate = Rc::clone(self);
        self.spawn(async move {
            gate.platform.timer.sleep(gate.timings.exit_duration).await;
            let applied = gate
                .modal
                .borrow_mut()
                .finish_close(transition, &*gate.platform.viewport);
            if applied {
                gate.start_particles();
                gate.render();
            }
        });
    }

    /// A click on the dimmed backdrop (not the dialog body).
    pub fn dismiss_backdrop(self: &Rc<Self>) {
        self.close_modal();
    }

    /// Escape closes the modal only while it is the active dialog.
    pub fn handle_escape(self: &Rc<Self>) -> bool {
        if !self.modal.borrow().visibility().is_active() {
            return false;
        }
        self.close_modal();
        true
    }

    pub fn switch_tab(&self, tab: AuthTab) {
        self.modal.borrow_mut().switch_tab(tab);
        self.render();
    }

    // =========================================================================
    // Authentication submission
    // =========================================================================

    pub async fn submit_login(self: &Rc<Self>, form: &LoginForm) -> Result<(), GateError> {
        let kind = SubmitKind::Login;
        self.ensure_idle(kind)?;
        let request = self.check_form(form.validate())?;

        self.set_control(kind, SubmitControl::working(kind));
        let outcome = self
            .platform
            .backend
            .login(&request)
            .await
            .and_then(ApiReply::into_result);
        let display_name = outcome.as_ref().ok().and_then(|r| r.user_name.clone());
        self.finish_submit(kind, outcome.map(|_| display_name))
    }

    pub async fn submit_signup(self: &Rc<Self>, form: &SignupForm) -> Result<(), GateError> {
        let kind = SubmitKind::Signup;
        self.ensure_idle(kind)?;
        let request = self.check_form(form.validate())?;

        self.set_control(kind, SubmitControl::working(kind));
        let outcome = self
            .platform
            .backend
            .signup(&request)
            .await
            .and_then(ApiReply::into_result);
        self.finish_submit(kind, outcome.map(|_| Some(request.full_name)))
    }

    fn ensure_idle(&self, kind: SubmitKind) -> Result<(), GateError> {
        if self.control(kind).disabled {
            tracing::debug!("Ignoring {:?} submit while one is in flight", kind);
            return Err(GateError::InFlight);
        }
        Ok(())
    }

    fn check_form<T>(&self, validated: Result<T, ValidationError>) -> Result<T, GateError> {
        validated.map_err(|e| {
            self.notify(Notice::error(e.to_string()));
            GateError::from(e)
        })
    }

    /// Settle the control and report the outcome. On success the redirect
    /// runs after the post-auth delay on the gate's own task, so it outlives
    /// whatever started the submit.
    fn finish_submit(
        self: &Rc<Self>,
        kind: SubmitKind,
        outcome: Result<Option<String>, GateError>,
    ) -> Result<(), GateError> {
        self.set_control(kind, SubmitControl::idle(kind));

        let display_name = match outcome {
            Ok(name) => name,
            Err(err) => {
                let fallback = match err {
                    GateError::Transport(_) => kind.transport_message(),
                    _ => kind.rejected_fallback(),
                };
                tracing::warn!("{:?} failed: {}", kind, err);
                self.notify(Notice::error(err.user_message(fallback)));
                return Err(err);
            }
        };

        self.notify(Notice::success(kind.success_message()));
        self.auth.borrow_mut().mark_signed_in(display_name);
        self.render();
        self.close_modal();

        let gate = Rc::clone(self);
        self.spawn(async move {
            gate.platform.timer.sleep(gate.timings.post_auth_delay).await;
            gate.complete_auth_redirect();
        });
        Ok(())
    }

    /// Replay the stored destination, or reload so every affordance
    /// re-evaluates against the new auth state.
    fn complete_auth_redirect(&self) {
        match RedirectIntent::take(&*self.platform.store) {
            Some(target) => {
                tracing::debug!("Redirecting after sign-in to {}", target);
                self.platform.navigator.assign(&target);
            }
            None => self.platform.navigator.reload(),
        }
    }

    fn control(&self, kind: SubmitKind) -> SubmitControl {
        match kind {
            SubmitKind::Login => self.login_control.get(),
            SubmitKind::Signup => self.signup_control.get(),
        }
    }

    fn set_control(&self, kind: SubmitKind, control: SubmitControl) {
        match kind {
            SubmitKind::Login => self.login_control.set(control),
            SubmitKind::Signup => self.signup_control.set(control),
        }
        self.render();
    }

    // =========================================================================
    // Account and cart
    // =========================================================================

    pub async fn logout(&self) -> Result<(), GateError> {
        match self
            .platform
            .backend
            .logout()
            .await
            .and_then(ApiReply::into_result)
        {
            Ok(_) => {
                self.platform.navigator.assign("/");
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Logout failed: {}", err);
                self.notify(Notice::error("Logout failed. Please try again."));
                Err(err)
            }
        }
    }

    /// Gated like any protected action, but without recording a redirect.
    /// Returns `Ok(false)` when the visitor was sent to the sign-in modal.
    pub async fn add_to_cart(
        self: &Rc<Self>,
        id: u32,
        kind: ItemKind,
        quantity: u32,
    ) -> Result<bool, GateError> {
        if !self.is_authenticated() {
            self.open_modal();
            return Ok(false);
        }

        let request = AddToCartRequest { id, kind, quantity };
        let outcome = self
            .platform
            .backend
            .add_to_cart(&request)
            .await
            .and_then(CartReply::into_result);

        match outcome {
            Ok(reply) => {
                self.cart.set(CartSummary::from(&reply));
                let message = reply.message.unwrap_or_else(|| "Added to cart".to_string());
                self.notify(Notice::success(message));
                self.render();
                Ok(true)
            }
            Err(err) => {
                let fallback = match err {
                    GateError::Transport(_) => "Error adding item to cart",
                    _ => "Could not add item to cart.",
                };
                tracing::warn!("Add to cart failed for item {}: {}", id, err);
                self.notify(Notice::error(err.user_message(fallback)));
                Err(err)
            }
        }
    }

    pub async fn refresh_cart(&self) {
        match self.platform.backend.cart_info().await {
            Ok(info) => {
                self.cart.set(CartSummary::from(info));
                self.render();
            }
            Err(e) => tracing::debug!("Could not fetch cart info: {}", e),
        }
    }

    pub fn social_login(&self, provider: &str) {
        let mut chars = provider.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        self.notify(Notice::info(format!("{} login coming soon!", name)));
    }

    pub fn forgot_password(&self) {
        self.notify(Notice::info("Forgot password functionality coming soon!"));
    }

    // =========================================================================
    // Background effects
    // =========================================================================

    /// Scroll-driven effects. Returns false when skipped because paused.
    pub fn on_scroll(&self, offset: f64) -> bool {
        if self.modal.borrow().pause().is_paused() {
            return false;
        }
        let effects = ScrollEffects::at(offset);
        if self.scroll_effects.replace(effects) != effects {
            self.render();
        }
        true
    }

    fn start_particles(self: &Rc<Self>) {
        let generation = self.particles.borrow_mut().start();
        let Some(generation) = generation else {
            return;
        };

        let gate = Rc::clone(self);
        self.spawn(async move {
            loop {
                gate.platform.timer.sleep(gate.timings.particle_interval).await;
                if !gate.particles.borrow().is_current(generation) {
                    break;
                }
                if gate.modal.borrow().pause().is_paused() {
                    continue;
                }
                let spawned = gate.particles.borrow_mut().tick(generation);
                if let Some(particle) = spawned {
                    gate.expire_particle_later(&particle);
                    gate.render();
                }
            }
        });
    }

    fn halt_particles(&self) {
        self.particles.borrow_mut().halt();
    }

    fn expire_particle_later(self: &Rc<Self>, particle: &Particle) {
        let gate = Rc::clone(self);
        let (id, lifetime) = (particle.id, particle.duration);
        self.spawn(async move {
            gate.platform.timer.sleep(lifetime).await;
            let removed = gate.particles.borrow_mut().expire(id);
            if removed {
                gate.render();
            }
        });
    }

    fn spawn(&self, task: impl std::future::Future<Output = ()> + 'static) {
        self.platform.spawner.spawn_local(task.boxed_local());
    }
}
