//! Wire types for the Roll Paradise backend API.
//!
//! The backend is an existing service; these types mirror the JSON it
//! accepts and returns. Unknown fields are ignored and missing optional
//! fields fall back to defaults so that a partial reply still parses.

use serde::{Deserialize, Serialize};

use crate::gate::GateError;

pub const CHECK_AUTH: &str = "/api/check-auth";
pub const LOGIN: &str = "/api/login";
pub const SIGNUP: &str = "/api/signup";
pub const LOGOUT: &str = "/api/logout";
pub const CART_INFO: &str = "/api/get_cart_info";
pub const ADD_TO_CART: &str = "/api/add_to_cart";

// =============================================================================
// Auth
// =============================================================================

/// Response of `GET /api/check-auth`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Generic `{success, message}` reply used by login, signup and logout.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Display name returned by login
    #[serde(default)]
    pub user_name: Option<String>,
}

impl ApiReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user_name: None,
        }
    }

    /// Map a `success: false` reply onto the rejection variant.
    pub fn into_result(self) -> Result<Self, GateError> {
        if self.success {
            Ok(self)
        } else {
            Err(GateError::Rejected {
                message: self.message,
            })
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Menu section an item belongs to (`type` on the wire)
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Roll,
    Side,
    Drink,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AddToCartRequest {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub quantity: u32,
}

/// Response of `GET /api/get_cart_info`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CartInfo {
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub cart_total: f64,
}

/// Response of `POST /api/add_to_cart`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CartReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub cart_total: f64,
}

impl CartReply {
    pub fn into_result(self) -> Result<Self, GateError> {
        if self.success {
            Ok(self)
        } else {
            Err(GateError::Rejected {
                message: self.message,
            })
        }
    }
}
