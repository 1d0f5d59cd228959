use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Access/refresh token pair returned by the sign-in endpoint.
///
/// Tokens live in memory only and are wiped when the pair is dropped or
/// replaced. They are never written to the settings file.
#[derive(Debug, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Credentials sent to the sign-in endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

/// Registration data sent to the sign-up endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
}

/// Address sent to the password-reset endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordPayload {
    pub email: String,
}
