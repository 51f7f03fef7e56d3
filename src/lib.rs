//! Roll Paradise web client
//!
//! The storefront's client-side presentation layer and the small host that
//! serves it.
//!
//! This library provides:
//! - `gate`: the sign-in gate (auth state, modal, scroll lock, redirect intent)
//! - `api`: JSON wire types for the backend endpoints
//! - `app`: the Dioxus web client rendering the gate
//! - `config`, `proxy`, `server`: the host process (server feature)

pub mod api;
pub mod app;
pub mod gate;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod proxy;
#[cfg(feature = "server")]
pub mod server;
