//! Session state and authentication.
//!
//! The session store owns the current authenticated identity. It is the only
//! component allowed to mutate it; everything else reads the identity (or the
//! role derived from it) through accessors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::IdentityDirectory;

/// User role, determining page and action visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full access, including rule/template administration.
    Admin,

    /// Day-to-day compliance work: review, drafting, reporting.
    ComplianceOfficer,

    /// Document review only.
    Reviewer,

    /// Read-only customer access.
    Client,
}

impl Role {
    /// All defined roles, in display order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::ComplianceOfficer, Role::Reviewer, Role::Client];

    /// Human-readable role name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ComplianceOfficer => "Compliance Officer",
            Self::Reviewer => "Reviewer",
            Self::Client => "Client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An authenticated identity. Created at login, destroyed at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Unique id for this login session.
    pub id: Uuid,

    /// Email address the user authenticated with.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Assigned role.
    pub role: Role,
}

/// Errors from authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair did not match any known identity.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Holds the current session: an optional identity plus the derived
/// "authenticated" fact.
///
/// The identity directory is injected so tests can substitute their own
/// credential table.
pub struct SessionStore {
    directory: Arc<dyn IdentityDirectory>,
    identity: Option<Identity>,
}

impl SessionStore {
    /// Create an unauthenticated session backed by the given directory.
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory, identity: None }
    }

    /// Attempt to authenticate.
    ///
    /// Succeeds only on an exact, case-sensitive match of both email and
    /// password against the identity directory. On success the session
    /// becomes authenticated with the matched identity; on failure the
    /// session is left as it was. There is no lockout or rate limiting:
    /// the session is process-local and single-user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let record = self
            .directory
            .lookup(email)
            .filter(|record| record.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let identity = Identity {
            id: Uuid::new_v4(),
            email: record.email,
            name: record.name,
            role: record.role,
        };

        tracing::info!(email = %identity.email, role = %identity.role, "session established");
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the session. Idempotent: logging out twice is the same as once.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(email = %identity.email, "session cleared");
        }
    }

    /// Role of the current identity, if authenticated.
    pub fn current_role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// The current identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
