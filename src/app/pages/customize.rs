//! Roll builder: pick a roll and a quantity.

use dioxus::prelude::*;

use crate::app::catalog;
use crate::app::components::{AddToCartButton, Layout};

const MAX_QUANTITY: u32 = 10;

#[component]
pub fn Customize() -> Element {
    let mut selected = use_signal(|| catalog::ROLLS[0].id);
    let mut quantity = use_signal(|| 1u32);

    let roll = catalog::find_roll(selected()).unwrap_or(&catalog::ROLLS[0]);
    let unit_price = roll.price_label();
    let total = format!("₹{:.2}", roll.price * f64::from(quantity()));

    rsx! {
        Layout {
            title: "Customize".to_string(),
            nav_active: "customize".to_string(),

            h1 { class: "page-title", "Build Your Order" }
            div { class: "customize-grid",
                div { class: "roll-picker",
                    for item in catalog::ROLLS {
                        button {
                            key: "{item.id}",
                            class: if item.id == selected() { "roll-option selected" } else { "roll-option" },
                            onclick: move |_| selected.set(item.id),
                            span { "{item.emoji}" }
                            span { "{item.name}" }
                        }
                    }
                }
                div { class: "order-summary",
                    h2 { "{roll.name}" }
                    p { class: "text-muted", "{roll.description}" }
                    p { class: "price", "{unit_price} each" }
                    div { class: "quantity-control",
                        button {
                            class: "btn btn-ghost",
                            disabled: quantity() <= 1,
                            onclick: move |_| quantity.set(quantity().saturating_sub(1).max(1)),
                            "−"
                        }
                        span { class: "quantity", "{quantity}" }
                        button {
                            class: "btn btn-ghost",
                            disabled: quantity() >= MAX_QUANTITY,
                            onclick: move |_| quantity.set((quantity() + 1).min(MAX_QUANTITY)),
                            "+"
                        }
                    }
                    p { class: "order-total", "Total: {total}" }
                    AddToCartButton { item: *roll, quantity: quantity() }
                }
            }
        }
    }
}
