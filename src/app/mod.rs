//! Dioxus web client entry point.
//!
//! This module provides the root App component. All gate state lives in a
//! single context created here; pages and components only render it.

use dioxus::prelude::*;

pub mod api;
pub mod browser;
pub mod catalog;
pub mod components;
pub mod gate_context;
pub mod pages;

use pages::{Cart, Customize, Home, Menu};
use gate_context::use_gate_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // One gate per page load (auth check, modal, cart badge)
    use_gate_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/menu")]
    Menu {},
    #[route("/customize")]
    Customize {},
    #[route("/cart")]
    Cart {},
}
