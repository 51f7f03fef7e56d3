//! Full menu: rolls, sides and drinks.

use dioxus::prelude::*;

use crate::app::catalog::{self, MenuItem};
use crate::app::components::{AddToCartButton, Layout};

#[component]
pub fn Menu() -> Element {
    rsx! {
        Layout {
            title: "Menu".to_string(),
            nav_active: "menu".to_string(),

            h1 { class: "page-title", "Our Menu" }
            MenuSection { id: "rolls", title: "Signature Rolls", items: catalog::ROLLS.to_vec() }
            MenuSection { id: "sides", title: "Sides", items: catalog::SIDES.to_vec() }
            MenuSection { id: "drinks", title: "Drinks", items: catalog::DRINKS.to_vec() }
        }
    }
}

#[component]
fn MenuSection(id: &'static str, title: &'static str, items: Vec<MenuItem>) -> Element {
    rsx! {
        section { id: "{id}", class: "menu-section",
            h2 { class: "section-title", "{title}" }
            div { class: "menu-grid",
                for item in items {
                    div { key: "{item.id}", class: "menu-card",
                        div { class: "menu-card-emoji", "{item.emoji}" }
                        h3 { "{item.name}" }
                        p { class: "text-muted", "{item.description}" }
                        div { class: "menu-card-footer",
                            span { class: "price", "₹{item.price:.2}" }
                            AddToCartButton { item: item }
                        }
                    }
                }
            }
        }
    }
}
