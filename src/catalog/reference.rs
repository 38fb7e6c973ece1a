//! Immutable reference data: industries, compliance rules, document
//! templates, and the dashboard fixture.
//!
//! The core only indexes into this catalog by key; it never validates or
//! mutates it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An industry vertical the rule and template catalogs are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    /// Stable key (`finance`, `healthcare`, ...).
    pub id: String,

    /// Display name.
    pub name: String,
}

/// A single compliance rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRule {
    /// Stable rule id.
    pub id: String,

    /// Rule text.
    pub text: String,

    /// Rule category.
    pub category: String,
}

/// A document template catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Stable template id.
    pub id: String,

    /// Template name.
    pub name: String,

    /// Industry key this template belongs to.
    pub industry: String,

    /// Template category.
    pub category: String,

    /// Template version.
    pub version: String,

    /// Last update date (ISO 8601).
    pub last_updated: String,

    /// Bracketed fill-ins the template body expects.
    pub placeholders: Vec<String>,
}

/// Review status of a dashboard document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    /// Passed its last review.
    Compliant,

    /// Waiting on a reviewer.
    PendingReview,

    /// Failed its last review.
    HighRisk,
}

/// One row of the dashboard's recent-documents table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Row id.
    pub id: u32,

    /// Document file name.
    pub name: String,

    /// Review status.
    pub status: DocumentStatus,

    /// Compliance score, 0..=100.
    pub score: u8,

    /// Date of the last review (ISO 8601).
    pub last_review: String,
}

/// The dashboard fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Overall compliance score, 0..=100.
    pub compliance_score: u8,

    /// Documents waiting on review.
    pub pending_reviews: u32,

    /// Deadlines in the coming period.
    pub upcoming_deadlines: u32,

    /// Recent documents, newest activity first.
    pub documents: Vec<DocumentSummary>,

    /// Six-period compliance score trend.
    pub compliance_trend: Vec<u8>,
}

fn builtin_industries() -> Vec<Industry> {
    let entries =
        [("finance", "Finance"), ("healthcare", "Healthcare"), ("manufacturing", "Manufacturing"), ("tech", "Tech")];
    entries
        .iter()
        .map(|(id, name)| Industry { id: (*id).to_string(), name: (*name).to_string() })
        .collect()
}

fn builtin_rules() -> HashMap<String, Vec<ComplianceRule>> {
    fn rule(id: &str, text: &str, category: &str) -> ComplianceRule {
        ComplianceRule { id: id.to_string(), text: text.to_string(), category: category.to_string() }
    }

    let mut rules = HashMap::new();
    rules.insert(
        "finance".to_string(),
        vec![
            rule(
                "FIN-001",
                "Customer records must be retained for seven years from the date of account closure.",
                "Data Retention",
            ),
            rule(
                "FIN-002",
                "A Customer Identification Program must verify identity before account opening.",
                "KYC",
            ),
            rule(
                "FIN-003",
                "Suspicious Activity Reports must be filed with the relevant authorities within 30 days of detection.",
                "AML",
            ),
        ],
    );
    rules.insert(
        "healthcare".to_string(),
        vec![
            rule(
                "HC-001",
                "A business associate agreement is required before protected health information may be shared.",
                "Data Privacy",
            ),
            rule(
                "HC-002",
                "Affected individuals must be notified of a breach within 60 days of discovery.",
                "Breach Notification",
            ),
        ],
    );
    rules.insert(
        "manufacturing".to_string(),
        vec![
            rule(
                "MFG-001",
                "Work-related fatalities must be reported to the authority within 8 hours.",
                "Safety Reporting",
            ),
            rule(
                "MFG-002",
                "Hazard communication training is required before an employee's first assignment.",
                "Training",
            ),
        ],
    );
    rules.insert(
        "tech".to_string(),
        vec![
            rule(
                "TECH-001",
                "A data processing agreement is required before engaging a third-party processor.",
                "Data Privacy",
            ),
            rule(
                "TECH-002",
                "Personal data must be erased without undue delay when the data subject requests it.",
                "Data Subject Rights",
            ),
        ],
    );
    rules
}

fn builtin_templates() -> Vec<Template> {
    fn template(
        id: &str,
        name: &str,
        industry: &str,
        category: &str,
        version: &str,
        last_updated: &str,
        placeholders: &[&str],
    ) -> Template {
        Template {
            id: id.to_string(),
            name: name.to_string(),
            industry: industry.to_string(),
            category: category.to_string(),
            version: version.to_string(),
            last_updated: last_updated.to_string(),
            placeholders: placeholders.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    vec![
        template(
            "aml-kyc-policy",
            "AML & KYC Policy",
            "finance",
            "Financial Reporting",
            "2.1",
            "2024-07-20",
            &["Institution Name", "Jurisdiction"],
        ),
        template(
            "hipaa-baa",
            "HIPAA Business Associate Agreement",
            "healthcare",
            "Data Privacy",
            "1.5",
            "2024-06-15",
            &["Covered Entity", "Business Associate"],
        ),
        template(
            "osha-safety-standards",
            "OSHA Safety Standards",
            "manufacturing",
            "Environmental",
            "3.0",
            "2024-08-01",
            &["Facility Name", "Safety Officer"],
        ),
        template(
            "gdpr-dpa",
            "GDPR Data Processing Agreement",
            "tech",
            "Data Privacy",
            "1.8",
            "2024-07-28",
            &["Controller", "Processor"],
        ),
    ]
}

fn builtin_dashboard() -> DashboardData {
    fn doc(id: u32, name: &str, status: DocumentStatus, score: u8, last_review: &str) -> DocumentSummary {
        DocumentSummary {
            id,
            name: name.to_string(),
            status,
            score,
            last_review: last_review.to_string(),
        }
    }

    DashboardData {
        compliance_score: 88,
        pending_reviews: 5,
        upcoming_deadlines: 3,
        documents: vec![
            doc(1, "Q3 Financial Report.docx", DocumentStatus::Compliant, 95, "2024-08-14"),
            doc(2, "AML Policy Update.pdf", DocumentStatus::PendingReview, 72, "2024-08-12"),
            doc(3, "Vendor Agreement - TechCorp.docx", DocumentStatus::HighRisk, 45, "2024-08-11"),
            doc(4, "HIPAA Compliance Guide.pdf", DocumentStatus::Compliant, 100, "2024-08-10"),
            doc(5, "New Employee Contracts.docx", DocumentStatus::PendingReview, 80, "2024-08-15"),
        ],
        compliance_trend: vec![65, 70, 78, 75, 82, 88],
    }
}

static BUILTIN: Lazy<ReferenceCatalog> = Lazy::new(|| ReferenceCatalog {
    industries: builtin_industries(),
    rules: builtin_rules(),
    templates: builtin_templates(),
    dashboard: builtin_dashboard(),
});

/// The read-only reference catalog.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    industries: Vec<Industry>,
    rules: HashMap<String, Vec<ComplianceRule>>,
    templates: Vec<Template>,
    dashboard: DashboardData,
}

impl ReferenceCatalog {
    /// The built-in catalog shipped with the product.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// All industries, in display order.
    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Look up an industry by key.
    pub fn industry(&self, id: &str) -> Option<&Industry> {
        self.industries.iter().find(|industry| industry.id == id)
    }

    /// Compliance rules for an industry key. Empty for unknown keys.
    pub fn rules_for(&self, industry_id: &str) -> &[ComplianceRule] {
        self.rules.get(industry_id).map_or(&[], Vec::as_slice)
    }

    /// All templates, in catalog order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Look up a template by id.
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// The dashboard fixture.
    pub fn dashboard(&self) -> &DashboardData {
        &self.dashboard
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_template_catalog() {
        let catalog = ReferenceCatalog::builtin();

        assert_eq!(catalog.templates().len(), 4);
        let template = catalog.template("aml-kyc-policy").unwrap();
        assert_eq!(template.name, "AML & KYC Policy");
        assert_eq!(template.industry, "finance");
        assert_eq!(template.version, "2.1");
    }

    #[test]
    fn test_every_template_industry_is_defined() {
        let catalog = ReferenceCatalog::builtin();
        for template in catalog.templates() {
            assert!(
                catalog.industry(&template.industry).is_some(),
                "template {} references unknown industry {}",
                template.id,
                template.industry
            );
        }
    }

    #[test]
    fn test_rules_keyed_by_industry() {
        let catalog = ReferenceCatalog::builtin();

        assert_eq!(catalog.rules_for("finance").len(), 3);
        assert_eq!(catalog.rules_for("healthcare").len(), 2);
        assert!(catalog.rules_for("unknown").is_empty());
    }

    #[test]
    fn test_dashboard_fixture() {
        let dashboard = ReferenceCatalog::builtin().dashboard().clone();

        assert_eq!(dashboard.compliance_score, 88);
        assert_eq!(dashboard.documents.len(), 5);
        assert_eq!(dashboard.compliance_trend.last(), Some(&88));

        let aml = &dashboard.documents[1];
        assert_eq!(aml.name, "AML Policy Update.pdf");
        assert_eq!(aml.status, DocumentStatus::PendingReview);
        assert_eq!(aml.score, 72);
    }
}
