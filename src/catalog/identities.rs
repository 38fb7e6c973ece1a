//! Known-identities table consulted by login.
//!
//! The directory is read-only reference data. It is injected behind a trait
//! so tests can substitute their own credential table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::Role;

/// One entry in the identity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Login email. Matched case-sensitively.
    pub email: String,

    /// Login password. Matched case-sensitively.
    pub password: String,

    /// Display name.
    pub name: String,

    /// Assigned role.
    pub role: Role,
}

impl IdentityRecord {
    /// Create a record.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self { email: email.into(), password: password.into(), name: name.into(), role }
    }
}

/// Read-only lookup into an identity table.
pub trait IdentityDirectory: Send + Sync {
    /// Find a record by email. Exact match only.
    fn lookup(&self, email: &str) -> Option<IdentityRecord>;
}

static BUILTIN: Lazy<Vec<IdentityRecord>> = Lazy::new(|| {
    vec![
        IdentityRecord::new("priya.sharma@lexiscomply.ai", "admin123", "Priya Sharma", Role::Admin),
        IdentityRecord::new(
            "marcus.webb@lexiscomply.ai",
            "comply456",
            "Marcus Webb",
            Role::ComplianceOfficer,
        ),
        IdentityRecord::new(
            "elena.novak@lexiscomply.ai",
            "review789",
            "Elena Novak",
            Role::Reviewer,
        ),
        IdentityRecord::new("david.chen@globex.example", "client321", "David Chen", Role::Client),
    ]
});

/// A fixed in-memory identity table.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    records: Vec<IdentityRecord>,
}

impl StaticDirectory {
    /// Create a directory over the given records.
    pub fn new(records: Vec<IdentityRecord>) -> Self {
        Self { records }
    }

    /// The built-in table: one account per role.
    pub fn builtin() -> Self {
        Self { records: BUILTIN.clone() }
    }

    /// All records, in table order.
    pub fn records(&self) -> &[IdentityRecord] {
        &self.records
    }
}

impl IdentityDirectory for StaticDirectory {
    fn lookup(&self, email: &str) -> Option<IdentityRecord> {
        self.records.iter().find(|record| record.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_role() {
        let directory = StaticDirectory::builtin();
        for role in Role::ALL {
            assert!(
                directory.records().iter().any(|record| record.role == role),
                "no builtin account for {role}"
            );
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let directory = StaticDirectory::builtin();

        assert!(directory.lookup("priya.sharma@lexiscomply.ai").is_some());
        assert!(directory.lookup("PRIYA.SHARMA@lexiscomply.ai").is_none());
        assert!(directory.lookup("unknown@example.com").is_none());
    }

    #[test]
    fn test_custom_directory() {
        let directory = StaticDirectory::new(vec![IdentityRecord::new(
            "tester@example.com",
            "pw",
            "Tester",
            Role::Reviewer,
        )]);

        let record = directory.lookup("tester@example.com").unwrap();
        assert_eq!(record.role, Role::Reviewer);
    }
}
