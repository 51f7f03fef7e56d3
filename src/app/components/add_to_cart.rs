//! Add-to-cart button for a menu item.

use dioxus::prelude::*;

use crate::app::catalog::MenuItem;
use crate::app::gate_context::use_gate;

#[component]
pub fn AddToCartButton(item: MenuItem, #[props(default = 1)] quantity: u32) -> Element {
    let ctx = use_gate();
    let mut busy = use_signal(|| false);

    rsx! {
        button {
            class: "btn btn-add-cart",
            disabled: busy(),
            onclick: move |_| {
                busy.set(true);
                ctx.run(|gate| async move {
                    let _ = gate.add_to_cart(item.id, item.kind, quantity).await;
                    busy.set(false);
                });
            },
            if busy() { "Adding..." } else { "Add to Cart" }
        }
    }
}
