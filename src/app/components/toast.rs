//! Transient notices, stacked in the corner.

use dioxus::prelude::*;

use crate::app::gate_context::use_gate;

/// Renders the current notices. Each one removes itself after its lifetime;
/// the close button removes it early.
#[component]
pub fn ToastStack() -> Element {
    let ctx = use_gate();
    let mut toasts = ctx.toasts;

    rsx! {
        div { class: "notification-stack",
            {toasts().into_iter().map(|toast| {
                let id = toast.id;
                let kind = toast.notice.kind.css_class();
                let icon = toast.notice.kind.icon();
                rsx! {
                    div { key: "{id}", class: "notification {kind}",
                        span { class: "notification-icon", "{icon}" }
                        span { class: "notification-message", "{toast.notice.message}" }
                        button {
                            class: "notification-close",
                            onclick: move |_| toasts.write().retain(|t| t.id != id),
                            "×"
                        }
                    }
                }
            })}
        }
    }
}
