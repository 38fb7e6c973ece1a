//! Static reference data: identities, industries, rules, and templates.
//!
//! Catalogs are read-only input to the core. They are injected where a seam
//! matters (the identity directory) and shared where it does not.

mod identities;
mod reference;

pub use identities::{IdentityDirectory, IdentityRecord, StaticDirectory};
pub use reference::{
    ComplianceRule, DashboardData, DocumentStatus, DocumentSummary, Industry, ReferenceCatalog,
    Template,
};
