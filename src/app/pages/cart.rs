//! Cart summary page.

use dioxus::prelude::*;

use crate::app::components::{GatedLink, Layout};
use crate::app::gate_context::use_gate;

#[component]
pub fn Cart() -> Element {
    let ctx = use_gate();
    let cart = ctx.view().cart;
    let total = cart.total_label();

    rsx! {
        Layout {
            title: "Cart".to_string(),
            nav_active: "cart".to_string(),

            h1 { class: "page-title", "Your Cart" }
            if cart.badge_visible() {
                div { class: "cart-summary card",
                    p { "Items: {cart.count}" }
                    p { class: "order-total", "Total: {total}" }
                }
            } else {
                div { class: "cart-empty card",
                    p { "Your cart is empty." }
                    GatedLink {
                        href: "/menu".to_string(),
                        class: "btn btn-secondary".to_string(),
                        "Browse the Menu"
                    }
                }
            }
        }
    }
}
