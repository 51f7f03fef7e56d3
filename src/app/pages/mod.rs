//! Storefront pages.

mod cart;
mod customize;
mod home;
mod menu;

pub use cart::Cart;
pub use customize::Customize;
pub use home::Home;
pub use menu::Menu;
