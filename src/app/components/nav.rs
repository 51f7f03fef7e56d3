//! Navigation bar with the cart badge and the auth affordances.

use dioxus::prelude::*;

use super::GatedLink;
use crate::app::gate_context::use_gate;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "menu")
    pub active: String,
}

/// Navigation bar. Exactly one of the sign-in button and the user-info
/// block is shown, per the cached auth state.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let ctx = use_gate();
    let view = ctx.view();
    let nav_class = if view.scroll_effects.navbar_elevated {
        "navbar scrolled"
    } else {
        "navbar"
    };
    let cart = view.cart;
    let total = cart.total_label();
    let user_name = view.user_name.clone().unwrap_or_default();

    let link_class = |id: &str| {
        if props.active == id {
            "nav-link active".to_string()
        } else {
            "nav-link".to_string()
        }
    };
    let menu_class = link_class("menu");
    let customize_class = link_class("customize");

    let open_gate = ctx.gate.clone();
    let logout_ctx = ctx.clone();

    rsx! {
        nav { class: "{nav_class}",
            div { class: "nav-brand",
                Link { to: Route::Home {}, strong { "🌯 Roll Paradise" } }
            }
            ul { class: "nav-links",
                li {
                    if props.active == "home" {
                        Link { to: Route::Home {}, strong { "Home" } }
                    } else {
                        Link { to: Route::Home {}, "Home" }
                    }
                }
                li {
                    GatedLink {
                        href: "/menu".to_string(),
                        class: menu_class,
                        "Menu"
                    }
                }
                li {
                    GatedLink {
                        href: "/customize".to_string(),
                        class: customize_class,
                        "Customize"
                    }
                }
            }
            div { class: "nav-actions",
                GatedLink { href: "/cart".to_string(), class: "cart-icon".to_string(),
                    "🛒"
                    if cart.badge_visible() {
                        span { class: "cart-count", "{cart.count}" }
                    }
                    span { class: "cart-total", "{total}" }
                }
                if view.affordances.show_sign_in {
                    button {
                        class: "btn btn-signin",
                        onclick: move |_| open_gate.open_modal(),
                        "Sign In"
                    }
                }
                if view.affordances.show_user_info {
                    div { class: "user-info",
                        span { class: "user-name",
                            "👋 {user_name}"
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| {
                                logout_ctx.run(|gate| async move {
                                    let _ = gate.logout().await;
                                });
                            },
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
