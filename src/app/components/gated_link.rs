//! Links and call-to-action buttons that pass through the sign-in gate.

use dioxus::prelude::*;

use crate::app::gate_context::use_gate;
use crate::gate::Affordance;

/// An anchor whose click is decided by the gate.
///
/// The browser's default navigation is always prevented. Allowed clicks go
/// through the client router; intercepted ones leave the visitor on the page
/// with the sign-in modal opening.
#[component]
pub fn GatedLink(
    /// Destination, relative to the current page
    href: String,
    /// Space-separated CSS classes (also used for gating)
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let ctx = use_gate();
    let gate = ctx.gate.clone();
    let target = href.clone();
    let classes = class.clone();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let class_list: Vec<&str> = classes.split_whitespace().collect();
                let affordance = Affordance {
                    href: Some(&target),
                    classes: &class_list,
                };
                if !gate.intercept(&affordance).is_intercepted() {
                    navigator().push(target.clone());
                }
            },
            {children}
        }
    }
}
