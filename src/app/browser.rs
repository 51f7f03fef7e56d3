//! Browser implementations of the gate's platform traits.
//!
//! Everything that touches `window`, `document` or `sessionStorage` lives
//! here. Outside wasm32 the same types exist as inert stand-ins so the app
//! compiles for the host target.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::app::api::HttpBackend;
use crate::app::gate_context::PageServices;
use crate::gate::{Navigator, SessionStore, TaskSpawner, Timer, Viewport};

/// The services the gate uses on a real page.
pub fn services() -> PageServices {
    PageServices {
        backend: Rc::new(HttpBackend),
        timer: Rc::new(BrowserTimer),
        spawner: Rc::new(BrowserSpawner),
        viewport: Rc::new(BrowserViewport),
        store: Rc::new(BrowserSessionStore),
        navigator: Rc::new(BrowserNavigator),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

// ============ WASM implementations ============

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::prelude::*;

    pub fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    pub fn body() -> Option<web_sys::HtmlElement> {
        window()?.document()?.body()
    }

    pub fn session_storage() -> Option<web_sys::Storage> {
        window()?.session_storage().ok().flatten()
    }

    /// Resolve after `ms` milliseconds via `setTimeout`.
    pub async fn sleep_ms(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = window() {
                if let Err(e) =
                    window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                {
                    tracing::warn!("setTimeout failed: {:?}", e);
                }
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    pub fn set_body_class(class: &str, on: bool) {
        if let Some(body) = body() {
            let list = body.class_list();
            let toggled = if on {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
            if let Err(e) = toggled {
                tracing::warn!("Toggling body class {} failed: {:?}", class, e);
            }
        }
    }

    pub type Listener = Closure<dyn FnMut(web_sys::Event)>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let ms = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        dom::sleep_ms(ms).await;
    }
}

#[cfg(target_arch = "wasm32")]
impl TaskSpawner for BrowserSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

#[cfg(target_arch = "wasm32")]
impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        dom::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn pin_body(&self, offset: f64) {
        if let Some(body) = dom::body() {
            let style = body.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("width", "100%");
            let _ = style.set_property("top", &format!("-{}px", offset));
        }
    }

    fn unpin_body(&self) {
        if let Some(body) = dom::body() {
            let style = body.style();
            let _ = style.remove_property("position");
            let _ = style.remove_property("width");
            let _ = style.remove_property("top");
        }
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(window) = dom::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::session_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = dom::session_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("sessionStorage write failed: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = dom::session_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("sessionStorage remove failed: {:?}", e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn current_url(&self) -> String {
        dom::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn assign(&self, url: &str) {
        if let Some(window) = dom::window() {
            if let Err(e) = window.location().assign(url) {
                tracing::warn!("Navigation to {} failed: {:?}", url, e);
            }
        }
    }

    fn reload(&self) {
        if let Some(window) = dom::window() {
            if let Err(e) = window.location().reload() {
                tracing::warn!("Reload failed: {:?}", e);
            }
        }
    }
}

/// Toggle the page-level `modal-open` marker on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn mark_body_modal_open(on: bool) {
    dom::set_body_class("modal-open", on);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mark_body_modal_open(_on: bool) {}

/// RAII guard for the document-level keydown and window scroll listeners.
/// Dropping it detaches both.
#[cfg(target_arch = "wasm32")]
pub struct PageListeners {
    keydown: dom::Listener,
    scroll: dom::Listener,
}

#[cfg(target_arch = "wasm32")]
impl PageListeners {
    pub fn attach(gate: std::rc::Rc<crate::gate::Gate>) -> Option<Self> {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let window = dom::window()?;
        let document = window.document()?;

        let escape_gate = gate.clone();
        let keydown = Closure::wrap(Box::new(move |e: web_sys::Event| {
            if let Some(key) = e.dyn_ref::<web_sys::KeyboardEvent>() {
                if key.key() == "Escape" {
                    escape_gate.handle_escape();
                }
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .ok()?;

        let scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            gate.on_scroll(BrowserViewport.scroll_y());
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { keydown, scroll })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for PageListeners {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = dom::window() {
            if let Some(document) = window.document() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    self.keydown.as_ref().unchecked_ref(),
                );
            }
            let _ = window
                .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        }
    }
}

// ============ Host-target stand-ins ============

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskSpawner for BrowserSpawner {
    fn spawn_local(&self, _task: LocalBoxFuture<'static, ()>) {
        tracing::debug!("Dropping client task outside the browser");
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        0.0
    }
    fn pin_body(&self, _offset: f64) {}
    fn unpin_body(&self) {}
    fn scroll_to(&self, _offset: f64) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) {}
    fn remove(&self, _key: &str) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl Navigator for BrowserNavigator {
    fn current_url(&self) -> String {
        "/".to_string()
    }
    fn assign(&self, _url: &str) {}
    fn reload(&self) {}
}
