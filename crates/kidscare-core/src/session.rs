//! Credentials and the authenticated session.
//!
//! `Credentials` exist only for the duration of a login or password-change
//! attempt and are never persisted. A `Session` is the bearer token plus the
//! identity the server reported for it; `Session::new` validates every field
//! so a session is either fully populated or does not exist at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::role::Role;

/// A username/password pair submitted to the identity endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The account user name.
    pub username: String,
    /// The account password.
    pub password: String,
}

impl Credentials {
    /// Creates a new credential pair. Emptiness is checked by the
    /// operations that submit credentials, not here.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password must never reach log output, so Debug masks it.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// The authenticated identity and bearer token for the current user.
///
/// Field names on the wire match both the login response body and the
/// persisted session document: `accessToken`, `nicNo`, `userName`,
/// `userType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    /// The opaque bearer token presented on protected requests.
    pub access_token: String,
    /// National identity number of the account holder.
    pub nic_no: String,
    /// Display name of the account holder.
    pub user_name: String,
    /// The account's role, governing which screen set is reachable.
    #[serde(rename = "userType")]
    pub role: Role,
}

impl Session {
    /// Constructs a session, rejecting any empty field.
    ///
    /// This is the only constructor, which makes the "fully present or fully
    /// absent" invariant structural: no partially populated session value
    /// can exist, and therefore none can be persisted.
    pub fn new(
        access_token: impl Into<String>,
        nic_no: impl Into<String>,
        user_name: impl Into<String>,
        role: Role,
    ) -> Result<Self> {
        let session = Self {
            access_token: access_token.into(),
            nic_no: nic_no.into(),
            user_name: user_name.into(),
            role,
        };
        session.validate()?;
        Ok(session)
    }

    /// Checks that every field is populated. Used both by [`Session::new`]
    /// and by stores re-validating a persisted document.
    pub fn validate(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(CoreError::empty_field("accessToken"));
        }
        if self.nic_no.is_empty() {
            return Err(CoreError::empty_field("nicNo"));
        }
        if self.user_name.is_empty() {
            return Err(CoreError::empty_field("userName"));
        }
        Ok(())
    }
}
