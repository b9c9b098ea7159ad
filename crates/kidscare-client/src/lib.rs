//! # kidscare-client
//!
//! Client library for the KidsCare pediatric immunization record service.
//!
//! This crate implements the authenticated-session core the mobile and CLI
//! front ends are built on:
//!
//! - Credential exchange against the identity endpoint
//! - Durable single-session storage with explicit save/load/clear lifecycle
//! - A bearer-authorized client for the protected record endpoints
//! - The validate-then-mutate password rotation protocol
//! - Role-based entry-screen resolution
//!
//! ## Modules
//!
//! - [`config`] - Service base URL and request timeout configuration
//! - [`error`] - Typed outcomes for every operation
//! - [`store`] - Session persistence (file-backed and in-memory)
//! - [`identity`] - Credential exchange (`POST /auth/login`)
//! - [`protected`] - Bearer-authorized requests and typed record fetches
//! - [`password`] - Password rotation (`PUT /auth/change-password`)
//! - [`routing`] - Role to screen-set resolution
//!
//! ## Session lifecycle
//!
//! The session store is the single source of truth for the active session.
//! [`identity::IdentityClient::login`] returns a session but never persists
//! it; the caller saves it. [`protected::AuthorizedClient`] re-reads the
//! store on every call and clears it when the server rejects the token,
//! pushing the application back to the unauthenticated state.

pub mod config;
pub mod error;
pub mod identity;
pub mod password;
pub mod protected;
pub mod routing;
pub mod store;

pub use config::{ClientConfig, ConfigError};
pub use error::{AuthorizedError, LoginError, PasswordChangeError, RoutingError};
pub use identity::IdentityClient;
pub use password::PasswordService;
pub use protected::{AuthorizedClient, ProtectedRequest};
pub use routing::{EntryScreen, ScreenSet, resolve_entry_screen, resolve_screen_set};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
