//! Backend Client for Passify.
//!
//! Typed wrapper over the REST API: JWT authentication, the user resource,
//! and the credential entry collection. The session token pair lives in
//! memory for the lifetime of the sign-in and is wiped on sign-out.

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use zeroize::{Zeroize, Zeroizing};

use crate::types::auth::{ResetPasswordPayload, SignInPayload, SignUpPayload, TokenPair};
use crate::types::entry::{Entry, EntryPayload};
use crate::types::errors::ApiError;
use crate::types::profile::{
    ChangeEmailPayload, ChangePasswordPayload, DeleteAccountPayload, NamePayload, Profile,
};

// Endpoint paths, joined onto the configured domain.
const SIGN_IN_PATH: &str = "/auth/jwt/create/";
const REFRESH_PATH: &str = "/auth/jwt/refresh/";
const SIGN_UP_PATH: &str = "/auth/users/";
const RESET_PASSWORD_PATH: &str = "/auth/users/reset_password/";
const PROFILE_PATH: &str = "/auth/users/me/";
const CHANGE_EMAIL_PATH: &str = "/auth/users/set_email/";
const CHANGE_PASSWORD_PATH: &str = "/auth/users/set_password/";
const ENTRIES_PATH: &str = "/my/database/";

/// Response body of the token refresh endpoint.
#[derive(Deserialize)]
struct RefreshedAccess {
    access: String,
}

/// Extracts a user-facing message from an error response body.
///
/// If the body is a JSON object, every value that is a string or a list of
/// strings contributes its strings, newline-joined in the order the fields
/// appear in the body (serde_json's `preserve_order` feature keeps object
/// fields in document order). Anything else falls back to the raw body
/// text.
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let mut messages = Vec::new();
            for value in map.values() {
                match value {
                    Value::String(s) => messages.push(s.clone()),
                    Value::Array(items) => {
                        for item in items {
                            if let Value::String(s) = item {
                                messages.push(s.clone());
                            }
                        }
                    }
                    _ => {}
                }
            }
            messages.join("\n")
        }
        _ => body.to_string(),
    }
}

/// REST client holding the HTTP connection pool and the in-memory session.
pub struct BackendClient {
    http: Client,
    domain: String,
    user_agent: String,
    session: Option<TokenPair>,
}

impl BackendClient {
    /// Creates a client for the given backend domain. `project_name` feeds
    /// the User-Agent sent on unauthenticated requests.
    pub fn new(domain: &str, project_name: &str) -> Self {
        Self {
            http: Client::new(),
            domain: domain.trim_end_matches('/').to_string(),
            user_agent: format!("{} Desktop/1.0 ({})", project_name, std::env::consts::OS),
            session: None,
        }
    }

    /// True while a token pair is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Installs a token pair directly, replacing any existing session.
    pub fn set_session(&mut self, tokens: TokenPair) {
        self.session = Some(tokens);
    }

    /// Drops the session; the token pair zeroizes itself on drop.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.domain, path)
    }

    fn auth_header(&self) -> Result<String, ApiError> {
        match &self.session {
            Some(tokens) => Ok(format!("JWT {}", tokens.access)),
            None => Err(ApiError::NotAuthenticated),
        }
    }

    /// Request builder for an authenticated call. The default User-Agent
    /// is kept here; only unauthenticated POSTs carry the custom one.
    fn authed(&self, method: Method, url: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header()?))
    }

    /// Request builder for an unauthenticated POST.
    fn anon_post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(path))
            .header(USER_AGENT, &self.user_agent)
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Maps any status other than `expected` to `ApiError::Status` with a
    /// best-effort message from the body.
    async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ApiError> {
        if response.status() == expected {
            return Ok(response);
        }
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code,
            message: extract_error_message(&body),
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ─── Authentication ───

    /// Signs in and stores the returned token pair for later requests.
    pub async fn sign_in(&mut self, payload: &SignInPayload) -> Result<(), ApiError> {
        let request = self.anon_post(SIGN_IN_PATH).json(payload);
        let response = Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        let tokens: TokenPair = Self::decode(response).await?;
        self.session = Some(tokens);
        Ok(())
    }

    /// Exchanges the refresh token for a new access token. The refresh
    /// token itself is kept; only the access token is replaced.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        // The working copy of the token is wiped when it drops.
        let refresh = match &self.session {
            Some(tokens) => Zeroizing::new(tokens.refresh.clone()),
            None => return Err(ApiError::NotAuthenticated),
        };
        let request = self
            .anon_post(REFRESH_PATH)
            .json(&serde_json::json!({ "refresh": refresh.as_str() }));
        let response = Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        let refreshed: RefreshedAccess = Self::decode(response).await?;
        if let Some(session) = self.session.as_mut() {
            session.access.zeroize();
            session.access = refreshed.access;
        }
        Ok(())
    }

    /// Registers a new account. The backend answers 201 on success.
    pub async fn sign_up(&self, payload: &SignUpPayload) -> Result<(), ApiError> {
        let request = self.anon_post(SIGN_UP_PATH).json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Requests a password-reset email. The backend answers 204.
    pub async fn reset_password(&self, payload: &ResetPasswordPayload) -> Result<(), ApiError> {
        let request = self.anon_post(RESET_PASSWORD_PATH).json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    // ─── Profile ───

    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        let request = self.authed(Method::GET, &self.endpoint(PROFILE_PATH))?;
        let response = Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        Self::decode(response).await
    }

    pub async fn update_name(&self, payload: &NamePayload) -> Result<(), ApiError> {
        let request = self
            .authed(Method::PUT, &self.endpoint(PROFILE_PATH))?
            .json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        Ok(())
    }

    pub async fn change_email(&self, payload: &ChangeEmailPayload) -> Result<(), ApiError> {
        let request = self
            .authed(Method::POST, &self.endpoint(CHANGE_EMAIL_PATH))?
            .json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    pub async fn change_password(&self, payload: &ChangePasswordPayload) -> Result<(), ApiError> {
        let request = self
            .authed(Method::POST, &self.endpoint(CHANGE_PASSWORD_PATH))?
            .json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Deletes the account. The current password rides in the request body.
    pub async fn delete_account(&self, payload: &DeleteAccountPayload) -> Result<(), ApiError> {
        let request = self
            .authed(Method::DELETE, &self.endpoint(PROFILE_PATH))?
            .json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    // ─── Entries ───

    pub async fn list_entries(&self) -> Result<Vec<Entry>, ApiError> {
        let request = self.authed(Method::GET, &self.endpoint(ENTRIES_PATH))?;
        let response = Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        Self::decode(response).await
    }

    pub async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ApiError> {
        let request = self
            .authed(Method::POST, &self.endpoint(ENTRIES_PATH))?
            .json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Fetches one entry. `id_url` is the entry's `id` field, which is its
    /// own detail URL on this backend.
    pub async fn fetch_entry(&self, id_url: &str) -> Result<Entry, ApiError> {
        let request = self.authed(Method::GET, id_url)?;
        let response = Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        Self::decode(response).await
    }

    pub async fn update_entry(&self, id_url: &str, payload: &EntryPayload) -> Result<(), ApiError> {
        let request = self.authed(Method::PATCH, id_url)?.json(payload);
        Self::expect_status(Self::send(request).await?, StatusCode::OK).await?;
        Ok(())
    }

    pub async fn delete_entry(&self, id_url: &str) -> Result<(), ApiError> {
        let request = self
            .authed(Method::DELETE, id_url)?
            .json(&serde_json::json!({}));
        Self::expect_status(Self::send(request).await?, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
