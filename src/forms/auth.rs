//! Sign-in, sign-up, and password-reset forms.
//!
//! Validation rules and their order mirror the screens exactly; the error
//! display text is shown to the user verbatim.

use super::is_valid_email;
use crate::types::auth::{ResetPasswordPayload, SignInPayload, SignUpPayload};
use crate::types::errors::ValidationError;

/// Sign-in screen: email and password.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Both fields are required, and the email must match the address
    /// pattern, checked in that order.
    pub fn validate(&self) -> Result<SignInPayload, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(SignInPayload {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Sign-up screen: names, email, password and its confirmation.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
}

impl SignUpForm {
    /// All fields required, valid email, matching passwords, password at
    /// least 8 characters, checked in that order.
    pub fn validate(&self) -> Result<SignUpPayload, ValidationError> {
        if self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.re_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.re_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < 8 {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(SignUpPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            re_password: self.re_password.clone(),
        })
    }
}

/// Forget-password screen: a single email field.
#[derive(Debug, Clone, Default)]
pub struct ForgetPasswordForm {
    pub email: String,
}

impl ForgetPasswordForm {
    /// Only the address pattern is checked; an empty field fails it too.
    pub fn validate(&self) -> Result<ResetPasswordPayload, ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ResetPasswordPayload {
            email: self.email.clone(),
        })
    }
}
