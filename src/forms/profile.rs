//! Profile screen forms: name, email change, password change, account
//! deletion.
//!
//! The profile screen hosts four independent sub-forms, each with its own
//! save button and its own validation. Note the profile screens use the
//! "Please fill all the required fields." wording, not the sign-in/entry
//! screens' "fill in all".

use super::is_valid_email;
use crate::types::errors::ValidationError;
use crate::types::profile::{
    ChangeEmailPayload, ChangePasswordPayload, DeleteAccountPayload, NamePayload,
};

/// First/last name sub-form.
#[derive(Debug, Clone, Default)]
pub struct NameForm {
    pub first_name: String,
    pub last_name: String,
}

impl NameForm {
    /// No client-side rules: the backend accepts empty names.
    pub fn validate(&self) -> Result<NamePayload, ValidationError> {
        Ok(NamePayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}

/// Email-change sub-form. The currently-displayed address is passed to
/// `validate` for the already-in-use comparison.
#[derive(Debug, Clone, Default)]
pub struct ChangeEmailForm {
    pub current_password: String,
    pub new_email: String,
    pub re_new_email: String,
}

impl ChangeEmailForm {
    /// All fields required, confirmation matches, valid address, and the
    /// new address differs from the current one, checked in that order.
    pub fn validate(&self, current_email: &str) -> Result<ChangeEmailPayload, ValidationError> {
        if self.current_password.is_empty()
            || self.new_email.is_empty()
            || self.re_new_email.is_empty()
        {
            return Err(ValidationError::MissingProfileFields);
        }
        if self.new_email != self.re_new_email {
            return Err(ValidationError::EmailMismatch);
        }
        if !is_valid_email(&self.new_email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.new_email == current_email {
            return Err(ValidationError::EmailUnchanged);
        }
        Ok(ChangeEmailPayload {
            current_password: self.current_password.clone(),
            new_email: self.new_email.clone(),
            re_new_email: self.re_new_email.clone(),
        })
    }
}

/// Password-change sub-form.
#[derive(Debug, Clone, Default)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub re_new_password: String,
}

impl ChangePasswordForm {
    /// All fields required, confirmation matches, new password at least 8
    /// characters, checked in that order.
    pub fn validate(&self) -> Result<ChangePasswordPayload, ValidationError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.re_new_password.is_empty()
        {
            return Err(ValidationError::MissingProfileFields);
        }
        if self.new_password != self.re_new_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < 8 {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(ChangePasswordPayload {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
            re_new_password: self.re_new_password.clone(),
        })
    }
}

/// Account-deletion confirmation: the current password only.
#[derive(Debug, Clone, Default)]
pub struct DeleteAccountForm {
    pub current_password: String,
}

impl DeleteAccountForm {
    pub fn validate(&self) -> Result<DeleteAccountPayload, ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingProfileFields);
        }
        Ok(DeleteAccountPayload {
            current_password: self.current_password.clone(),
        })
    }
}
