//! Landing page: hero call-to-actions and the featured rolls.

use dioxus::prelude::*;

use crate::app::catalog;
use crate::app::components::{AddToCartButton, GatedLink, Layout};

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            section { class: "hero",
                h1 { class: "hero-title", "Wrapped with Love, Rolled to Perfection" }
                p { class: "hero-subtitle",
                    "Fresh ingredients, bold flavours and rolls made exactly the way you like them."
                }
                div { class: "hero-buttons",
                    GatedLink {
                        href: "/customize".to_string(),
                        class: "btn btn-primary".to_string(),
                        "Order Now"
                    }
                    GatedLink {
                        href: "/menu".to_string(),
                        class: "btn btn-secondary".to_string(),
                        "View Full Menu"
                    }
                }
            }

            section { id: "featured-rolls", class: "featured",
                h2 { class: "section-title", "Featured Rolls" }
                div { class: "menu-grid",
                    for item in catalog::featured_rolls() {
                        div { key: "{item.id}", class: "menu-card",
                            div { class: "menu-card-emoji", "{item.emoji}" }
                            h3 { "{item.name}" }
                            p { class: "text-muted", "{item.description}" }
                            div { class: "menu-card-footer",
                                span { class: "price", "₹{item.price:.2}" }
                                AddToCartButton { item: *item }
                            }
                        }
                    }
                }
            }
        }
    }
}
