//! Password rotation.
//!
//! A two-step protocol: the current credentials are re-validated against
//! the identity endpoint, and only on success is the change request issued.
//! The ordering is mandatory; the mutating call must never be sent for an
//! account the caller cannot actually authenticate as.

use serde::Serialize;

use kidscare_core::Credentials;

use crate::config::ClientConfig;
use crate::error::PasswordChangeError;
use crate::identity::IdentityClient;

/// Body of `PUT /auth/change-password`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    user_name: &'a str,
    password: &'a str,
    new_password: &'a str,
}

/// Changes the password for the currently-claimed identity.
pub struct PasswordService {
    http: reqwest::Client,
    config: ClientConfig,
    identity: IdentityClient,
}

impl PasswordService {
    /// Creates a service for the KidsCare endpoint configured in `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: config.http_client(),
            identity: IdentityClient::new(config.clone()),
            config,
        }
    }

    /// Rotates the account password.
    ///
    /// Local checks (all fields non-empty, new password differs from the
    /// current one) run before any I/O. Re-authentication failure aborts
    /// the rotation before the change endpoint is ever contacted. A
    /// successful rotation does not update any stored session.
    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), PasswordChangeError> {
        for (value, field) in [
            (username, "username"),
            (current_password, "password"),
            (new_password, "newPassword"),
        ] {
            if value.is_empty() {
                return Err(PasswordChangeError::InvalidInput {
                    field: field.into(),
                });
            }
        }
        if current_password == new_password {
            return Err(PasswordChangeError::SameAsCurrent);
        }

        // Step 1: prove control of the account before mutating it.
        self.identity
            .login(&Credentials::new(username, current_password))
            .await
            .map_err(PasswordChangeError::ReauthenticationFailed)?;

        // Step 2: the mutating call, only reachable after step 1 succeeded.
        let url = self.config.endpoint("auth/change-password");
        tracing::debug!(username = %username, "submitting password change");
        let response = self
            .http
            .put(url)
            .json(&ChangePasswordRequest {
                user_name: username,
                password: current_password,
                new_password,
            })
            .send()
            .await
            .map_err(|source| PasswordChangeError::Unreachable { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PasswordChangeError::Rejected { status });
        }
        Ok(())
    }
}
