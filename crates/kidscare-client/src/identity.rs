//! Credential exchange against the identity endpoint.
//!
//! [`IdentityClient::login`] turns a username/password pair into a
//! [`Session`]. It performs exactly one network call per invocation, never
//! retries, and never touches the session store; persisting the returned
//! session is the caller's decision.

use serde::{Deserialize, Serialize};

use kidscare_core::{Credentials, Role, Session};

use crate::config::ClientConfig;
use crate::error::LoginError;

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_name: &'a str,
    password: &'a str,
}

/// Success body of `POST /auth/login`. Every field is optional at the wire
/// level; [`session_from_response`] decides what is actually required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    nic_no: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    user_type: Option<String>,
}

/// Client for the identity endpoint.
pub struct IdentityClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl IdentityClient {
    /// Creates a client for the service configured in `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: config.http_client(),
            config,
        }
    }

    /// Exchanges `credentials` for a session.
    ///
    /// Empty fields are rejected locally before any network call. A
    /// well-formed success response must carry a non-empty `accessToken`
    /// and a `userType` from the known role set; anything else is a
    /// [`LoginError::MalformedResponse`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, LoginError> {
        if credentials.username.is_empty() {
            return Err(LoginError::InvalidInput {
                field: "username".into(),
            });
        }
        if credentials.password.is_empty() {
            return Err(LoginError::InvalidInput {
                field: "password".into(),
            });
        }

        let url = self.config.endpoint("auth/login");
        tracing::debug!(username = %credentials.username, "exchanging credentials for a session");

        let response = self
            .http
            .post(url)
            .json(&LoginRequest {
                user_name: &credentials.username,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|source| LoginError::Unreachable { source })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::debug!(username = %credentials.username, "credentials rejected");
            return Err(LoginError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(LoginError::UnexpectedStatus { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LoginError::Unreachable { source })?;
        let parsed: LoginResponse = serde_json::from_str(&body).map_err(|err| {
            LoginError::MalformedResponse {
                message: err.to_string(),
            }
        })?;
        session_from_response(parsed)
    }
}

fn malformed(message: impl Into<String>) -> LoginError {
    LoginError::MalformedResponse {
        message: message.into(),
    }
}

/// Validates a decoded login response and builds the session.
fn session_from_response(response: LoginResponse) -> Result<Session, LoginError> {
    let access_token = response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| malformed("missing accessToken"))?;
    let user_type = response
        .user_type
        .ok_or_else(|| malformed("missing userType"))?;
    let role: Role = user_type
        .parse()
        .map_err(|_| malformed(format!("unrecognized userType '{user_type}'")))?;
    let nic_no = response.nic_no.ok_or_else(|| malformed("missing nicNo"))?;
    let user_name = response
        .user_name
        .ok_or_else(|| malformed("missing userName"))?;

    Session::new(access_token, nic_no, user_name, role)
        .map_err(|err| malformed(err.to_string()))
}
