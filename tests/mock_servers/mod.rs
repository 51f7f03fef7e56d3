//! Mock servers for host integration testing
//!
//! These mock servers simulate the existing storefront backend, allowing the
//! `/api` proxy to be exercised end to end without the real service.

pub mod backend;

pub use backend::MockBackend;
