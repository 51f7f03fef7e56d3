//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::{Nav, ParticleLayer, SignInModal, ToastStack};
use crate::app::gate_context::use_gate;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let ctx = use_gate();
    let view = ctx.view();
    let version = env!("RP_VERSION");
    let git_sha = env!("RP_GIT_SHA");
    let full_title = format!("{} - Roll Paradise", props.title);
    let indicator_opacity = view.scroll_effects.indicator_opacity;

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "/static/css/style.css" }

        ParticleLayer { particles: view.particles.clone() }
        Nav { active: props.nav_active.clone() }
        main { class: "page-content",
            {props.children}
        }
        div {
            class: "scroll-indicator",
            style: "opacity: {indicator_opacity}",
            "⌄"
        }
        footer { class: "footer",
            small { class: "text-muted", "Roll Paradise v{version} ({git_sha})" }
        }

        SignInModal {}
        ToastStack {}
    }
}
