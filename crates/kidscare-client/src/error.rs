//! Typed outcomes for client operations.
//!
//! Every operation returns a specific, distinguishable error kind rather
//! than an opaque failure. In particular, transport problems (`Unreachable`)
//! are never conflated with authentication or authorization outcomes, so a
//! caller can decide between "retry later" and "force re-login".

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from exchanging credentials at the identity endpoint.
#[derive(Debug, Error)]
pub enum LoginError {
    /// A credential field was empty. Detected locally; no network call is
    /// made.
    #[error("Field '{field}' must not be empty")]
    InvalidInput {
        /// The empty field.
        field: String,
    },

    /// The server rejected the username/password pair.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The server answered success but the body was missing the token, the
    /// role, or carried a role outside the known set.
    #[error("Malformed login response: {message}")]
    MalformedResponse {
        /// What was wrong with the response.
        message: String,
    },

    /// The server answered with a status that signals neither success nor a
    /// credential problem.
    #[error("Identity endpoint returned HTTP {status}")]
    UnexpectedStatus {
        /// The response status.
        status: StatusCode,
    },

    /// The identity endpoint could not be reached.
    #[error("Identity service unreachable: {source}")]
    Unreachable {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from executing a request against a protected endpoint.
#[derive(Debug, Error)]
pub enum AuthorizedError {
    /// No session is stored; the request was never dispatched.
    #[error("No active session; log in first")]
    NoSession,

    /// The server rejected the bearer token. The stored session has been
    /// cleared as a side effect.
    #[error("Session rejected by the server; log in again")]
    Unauthorized,

    /// The server answered with an unexpected non-success status.
    #[error("Protected endpoint returned HTTP {status}")]
    UnexpectedStatus {
        /// The response status.
        status: StatusCode,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response body: {message}")]
    MalformedBody {
        /// What was wrong with the body.
        message: String,
    },

    /// The endpoint could not be reached.
    #[error("Service unreachable: {source}")]
    Unreachable {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from the two-step password rotation.
#[derive(Debug, Error)]
pub enum PasswordChangeError {
    /// A field was empty. Detected locally; no network call is made.
    #[error("Field '{field}' must not be empty")]
    InvalidInput {
        /// The empty field.
        field: String,
    },

    /// The new password equals the current one. Detected locally; no network
    /// call is made.
    #[error("New password must be different from the current password")]
    SameAsCurrent,

    /// Re-authentication with the current password failed; the change
    /// endpoint was never contacted.
    #[error("Re-authentication failed: {0}")]
    ReauthenticationFailed(#[source] LoginError),

    /// The change endpoint refused the request after successful
    /// re-authentication.
    #[error("Password change rejected (HTTP {status})")]
    Rejected {
        /// The response status.
        status: StatusCode,
    },

    /// The change endpoint could not be reached.
    #[error("Password service unreachable: {source}")]
    Unreachable {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from resolving a role to its screen set.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The role value maps to no screen set. The caller must surface this
    /// instead of navigating anywhere.
    #[error("Unknown role: {role}")]
    UnknownRole {
        /// The unmapped role value.
        role: String,
    },
}
