//! Bearer-authorized access to protected endpoints.
//!
//! [`AuthorizedClient`] is the only component that attaches the bearer
//! token to outbound requests. It re-reads the session store on every call,
//! so a token can never go stale across calls, and it clears the store when
//! the server rejects the token: a rejected token is assumed permanently
//! invalid for this client, and the application drops back to the
//! unauthenticated state.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use kidscare_core::{PatientSummary, VaccineRecord};

use crate::config::ClientConfig;
use crate::error::AuthorizedError;
use crate::store::SessionStore;

/// A request destined for a protected endpoint. Callers describe the call;
/// only [`AuthorizedClient::execute`] attaches the credential.
#[derive(Debug, Clone)]
pub struct ProtectedRequest {
    method: Method,
    path: String,
    body: Option<Value>,
}

impl ProtectedRequest {
    /// Creates a request with the given method and service-relative path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Convenience constructor for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Convenience constructor for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Convenience constructor for a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The request method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The service-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Executes [`ProtectedRequest`]s with the current session's token attached.
pub struct AuthorizedClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
}

impl AuthorizedClient {
    /// Creates a client reading its session from `store`.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            http: config.http_client(),
            config,
            store,
        }
    }

    /// Executes `request` with the stored session's bearer token.
    ///
    /// If no session is stored the call fails with
    /// [`AuthorizedError::NoSession`] without touching the network. If the
    /// server rejects the token, the stored session is cleared before
    /// [`AuthorizedError::Unauthorized`] is returned, so a subsequent
    /// `load()` observes the unauthenticated state.
    pub async fn execute(&self, request: &ProtectedRequest) -> Result<Value, AuthorizedError> {
        // Re-read per call; a token from a previously loaded session must
        // never be reused here.
        let session = self.store.load().await.ok_or(AuthorizedError::NoSession)?;

        let url = self.config.endpoint(request.path());
        let mut outbound = self
            .http
            .request(request.method().clone(), url)
            .bearer_auth(&session.access_token);
        if let Some(body) = request.body() {
            outbound = outbound.json(body);
        }

        let response = outbound
            .send()
            .await
            .map_err(|source| AuthorizedError::Unreachable { source })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!(path = request.path(), "bearer token rejected, clearing stored session");
            if let Err(err) = self.store.clear().await {
                tracing::warn!(%err, "failed to clear rejected session");
            }
            return Err(AuthorizedError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AuthorizedError::UnexpectedStatus { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| AuthorizedError::Unreachable { source })?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| AuthorizedError::MalformedBody {
            message: err.to_string(),
        })
    }

    /// Fetches the authenticated user's vaccine records.
    pub async fn vaccines(&self) -> Result<Vec<VaccineRecord>, AuthorizedError> {
        let value = self.execute(&ProtectedRequest::get("auth/vaccines")).await?;
        serde_json::from_value(value).map_err(|err| AuthorizedError::MalformedBody {
            message: err.to_string(),
        })
    }

    /// Fetches the doctor-facing patient listing.
    pub async fn patients(&self) -> Result<Vec<PatientSummary>, AuthorizedError> {
        let value = self
            .execute(&ProtectedRequest::get("auth/patients"))
            .await?;
        serde_json::from_value(value).map_err(|err| AuthorizedError::MalformedBody {
            message: err.to_string(),
        })
    }
}
