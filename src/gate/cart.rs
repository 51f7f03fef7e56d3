//! Cart badge state.

use crate::api::{CartInfo, CartReply};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartSummary {
    pub count: u32,
    pub total: f64,
}

impl CartSummary {
    /// The count badge is hidden for an empty cart
    pub fn badge_visible(&self) -> bool {
        self.count > 0
    }

    pub fn total_label(&self) -> String {
        format!("₹{:.2}", self.total)
    }
}

impl From<CartInfo> for CartSummary {
    fn from(info: CartInfo) -> Self {
        Self {
            count: info.cart_count,
            total: info.cart_total,
        }
    }
}

impl From<&CartReply> for CartSummary {
    fn from(reply: &CartReply) -> Self {
        Self {
            count: reply.cart_count,
            total: reply.cart_total,
        }
    }
}
