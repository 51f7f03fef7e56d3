//! App-level gate context.
//!
//! Owns the single [`Gate`] for the page and mirrors its render snapshots
//! into Dioxus signals, so components re-render from [`GateView`] alone.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures::FutureExt;

use crate::app::browser;
use crate::gate::{
    Backend, Gate, GateTimings, GateView, Navigator, Notice, Platform, Presenter, SessionStore,
    TaskSpawner, Timer, Viewport,
};

/// Everything the gate needs from the page except the render sink, which the
/// context supplies itself.
#[derive(Clone)]
pub struct PageServices {
    pub backend: Rc<dyn Backend>,
    pub timer: Rc<dyn Timer>,
    pub spawner: Rc<dyn TaskSpawner>,
    pub viewport: Rc<dyn Viewport>,
    pub store: Rc<dyn SessionStore>,
    pub navigator: Rc<dyn Navigator>,
}

impl PageServices {
    pub fn into_platform(self, presenter: Rc<dyn Presenter>) -> Platform {
        Platform {
            backend: self.backend,
            timer: self.timer,
            spawner: self.spawner,
            viewport: self.viewport,
            store: self.store,
            navigator: self.navigator,
            presenter,
        }
    }
}

/// A notice on screen, keyed so its dismissal timer removes the right one.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global gate state shared via context
#[derive(Clone)]
pub struct GateContext {
    pub gate: Rc<Gate>,
    pub view: Signal<GateView>,
    pub toasts: Signal<Vec<Toast>>,
}

impl GateContext {
    pub fn view(&self) -> GateView {
        (self.view)()
    }

    /// Run one of the gate's async operations.
    ///
    /// The task belongs to the root scope. Submits are started from the modal,
    /// which unmounts once it closes, and must still finish.
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<Gate>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_forever(op(self.gate.clone()));
    }
}

/// [`Presenter`] that writes into the context signals.
struct SignalPresenter {
    view: Signal<GateView>,
    toasts: Signal<Vec<Toast>>,
    next_toast: Cell<u64>,
    lifetime: Duration,
    timer: Rc<dyn Timer>,
    spawner: Rc<dyn TaskSpawner>,
}

impl Presenter for SignalPresenter {
    fn present(&self, view: &GateView) {
        let mut signal = self.view;
        if signal.peek().body_locked != view.body_locked {
            browser::mark_body_modal_open(view.body_locked);
        }
        if *signal.peek() != *view {
            signal.set(view.clone());
        }
    }

    fn notify(&self, notice: Notice) {
        let id = self.next_toast.get();
        self.next_toast.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notice });

        let timer = self.timer.clone();
        let lifetime = self.lifetime;
        self.spawner.spawn_local(
            async move {
                timer.sleep(lifetime).await;
                toasts.write().retain(|t| t.id != id);
            }
            .boxed_local(),
        );
    }
}

/// Initialize the gate context - call once at app root
pub fn use_gate_provider() -> GateContext {
    let ctx = use_gate_provider_with(GateTimings::default(), browser::services);

    // Client-side only: page listeners, first render and the auth check
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;

        let listeners: Rc<RefCell<Option<browser::PageListeners>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let page = ctx.clone();
        use_effect(move || {
            if listeners.borrow().is_some() {
                return;
            }
            *listeners.borrow_mut() = browser::PageListeners::attach(page.gate.clone());

            page.gate.boot();
            page.run(|gate| async move {
                gate.load().await;
            });
        });
    }

    ctx
}

/// Initialize the gate context over the given page services.
///
/// `services` runs once, on first render. Booting the gate is left to the
/// caller.
pub fn use_gate_provider_with(
    timings: GateTimings,
    services: impl FnOnce() -> PageServices,
) -> GateContext {
    let view = use_signal(GateView::default);
    let toasts = use_signal(Vec::<Toast>::new);

    let gate = use_hook(move || {
        let services = services();
        let presenter = SignalPresenter {
            view,
            toasts,
            next_toast: Cell::new(0),
            lifetime: timings.notice_lifetime,
            timer: services.timer.clone(),
            spawner: services.spawner.clone(),
        };
        Gate::new(services.into_platform(Rc::new(presenter)), timings)
    });

    let ctx = GateContext { gate, view, toasts };
    use_context_provider(|| ctx.clone());
    ctx
}

/// Get gate context - use in any component
pub fn use_gate() -> GateContext {
    use_context::<GateContext>()
}
