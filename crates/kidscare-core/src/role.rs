//! User role classification.
//!
//! The identity endpoint reports every account as either a parent or a
//! doctor; the role decides which screen set the client may open. Any other
//! value coming off the wire is rejected at the boundary where it is parsed,
//! never carried along as an unchecked string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The class of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A parent or guardian viewing their own children's records.
    #[serde(rename = "PARENT")]
    Parent,
    /// A doctor with access to the patient listing.
    #[serde(rename = "DOCTOR")]
    Doctor,
}

impl Role {
    /// Returns the wire-level `userType` value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "PARENT",
            Self::Doctor => "DOCTOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PARENT" => Ok(Self::Parent),
            "DOCTOR" => Ok(Self::Doctor),
            other => Err(CoreError::unknown_role(other)),
        }
    }
}
