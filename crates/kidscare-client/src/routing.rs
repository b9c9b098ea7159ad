//! Role to screen-set resolution.
//!
//! The router decides which screen set an authenticated user may reach.
//! Resolution goes through a single role-name table; a value outside the
//! known set is an explicit [`RoutingError::UnknownRole`], never a default
//! to either screen set. The UI layer owns the actual navigation and
//! rendering.

use std::fmt;

use kidscare_core::{Role, Session};

use crate::error::RoutingError;

/// The group of views reachable after role resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSet {
    /// The parent-facing screens (child records, vaccine details).
    Parent,
    /// The doctor-facing screens (patient listing, per-patient profiles).
    Doctor,
}

impl ScreenSet {
    /// The navigator route name of the screen set's entry screen.
    #[must_use]
    pub fn route_name(&self) -> &'static str {
        match self {
            Self::Parent => "parentHome",
            Self::Doctor => "docHome",
        }
    }
}

impl fmt::Display for ScreenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// The router's output: the destination screen set plus the identity fields
/// the UI passes forward as navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryScreen {
    pub screen_set: ScreenSet,
    pub nic_no: String,
    pub user_name: String,
    pub role: Role,
}

/// Maps a wire-level role name to the screen set it may reach.
///
/// This is the single place role names become navigation decisions; it is
/// used both for raw names arriving from navigation state and by
/// [`resolve_entry_screen`].
pub fn resolve_screen_set(role_name: &str) -> Result<ScreenSet, RoutingError> {
    match role_name.parse::<Role>() {
        Ok(Role::Parent) => Ok(ScreenSet::Parent),
        Ok(Role::Doctor) => Ok(ScreenSet::Doctor),
        Err(_) => Err(RoutingError::UnknownRole {
            role: role_name.to_string(),
        }),
    }
}

/// Resolves the entry screen for an authenticated session.
pub fn resolve_entry_screen(session: &Session) -> Result<EntryScreen, RoutingError> {
    let screen_set = resolve_screen_set(session.role.as_str())?;
    Ok(EntryScreen {
        screen_set,
        nic_no: session.nic_no.clone(),
        user_name: session.user_name.clone(),
        role: session.role,
    })
}
