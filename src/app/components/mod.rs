//! Shared UI components for the storefront.

pub mod add_to_cart;
pub mod gated_link;
pub mod layout;
pub mod nav;
pub mod particles;
pub mod signin_modal;
pub mod toast;

pub use add_to_cart::AddToCartButton;
pub use gated_link::GatedLink;
pub use layout::Layout;
pub use nav::Nav;
pub use particles::ParticleLayer;
pub use signin_modal::SignInModal;
pub use toast::ToastStack;
