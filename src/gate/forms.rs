//! Sign-in and sign-up form payloads, validation and submit-button state.

use crate::api::{LoginRequest, SignupRequest};
use crate::gate::ValidationError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if blank(&self.email) || blank(&self.password) {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if [&self.full_name, &self.email, &self.phone, &self.password]
            .into_iter()
            .any(|f| blank(f))
        {
            return Err(ValidationError::MissingFields);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(SignupRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Which auth form is being submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitKind {
    Login,
    Signup,
}

impl SubmitKind {
    pub fn idle_label(&self) -> &'static str {
        match self {
            SubmitKind::Login => "Sign In",
            SubmitKind::Signup => "Create Account",
        }
    }

    pub fn working_label(&self) -> &'static str {
        match self {
            SubmitKind::Login => "Signing In...",
            SubmitKind::Signup => "Creating Account...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SubmitKind::Login => "Welcome back! Sign in successful.",
            SubmitKind::Signup => "Account created successfully! Welcome to Roll Paradise!",
        }
    }

    /// Shown when the backend rejects without a message
    pub fn rejected_fallback(&self) -> &'static str {
        match self {
            SubmitKind::Login => "Invalid email or password.",
            SubmitKind::Signup => "Error creating account. Please try again.",
        }
    }

    pub fn transport_message(&self) -> &'static str {
        match self {
            SubmitKind::Login => "Error signing in. Please try again.",
            SubmitKind::Signup => "Error creating account. Please try again.",
        }
    }
}

/// Render state of a form's submit button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn idle(kind: SubmitKind) -> Self {
        Self {
            label: kind.idle_label(),
            disabled: false,
        }
    }

    pub fn working(kind: SubmitKind) -> Self {
        Self {
            label: kind.working_label(),
            disabled: true,
        }
    }
}
