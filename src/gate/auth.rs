//! Cached authentication state for the current page load.

use crate::api::{AuthStatus, UserInfo};

/// Whether the visitor is signed in, as last reported by the backend.
///
/// Starts unauthenticated so that clicks before the first refresh resolves
/// are gated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    authenticated: bool,
    user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Name for the user-info block, falling back to the email address.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        match user.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Some(name.to_string()),
            _ if !user.email.is_empty() => Some(user.email.clone()),
            _ => None,
        }
    }

    /// Apply a check-auth result. A failed check clears the state.
    pub fn apply_check(&mut self, status: Option<AuthStatus>) {
        match status {
            Some(status) => {
                self.authenticated = status.authenticated;
                self.user = if status.authenticated { status.user } else { None };
            }
            None => {
                self.authenticated = false;
                self.user = None;
            }
        }
    }

    /// Record a successful login or signup.
    pub fn mark_signed_in(&mut self, display_name: Option<String>) {
        self.authenticated = true;
        if let Some(name) = display_name {
            let user = self.user.get_or_insert_with(UserInfo::default);
            user.name = Some(name);
        }
    }

    pub fn affordances(&self) -> AuthAffordances {
        AuthAffordances::for_state(self.authenticated)
    }
}

/// Which auth-related page elements are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthAffordances {
    pub show_sign_in: bool,
    pub show_user_info: bool,
}

impl AuthAffordances {
    pub fn for_state(authenticated: bool) -> Self {
        Self {
            show_sign_in: !authenticated,
            show_user_info: authenticated,
        }
    }
}

impl Default for AuthAffordances {
    fn default() -> Self {
        Self::for_state(false)
    }
}
