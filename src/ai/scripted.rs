//! The scripted engine: every result is a fixed payload.

use super::{CounselEngine, Findings, Issue, IssueKind, Severity};

const ORIGINAL_TEXT: &str = "\
Section 4.1: Customer Due Diligence (CDD) procedures must be applied to all new customers.

Section 4.2: Data Retention: All customer records shall be maintained for a period of five years from the date of account closure.

Section 5.1: Suspicious Activity Reports (SARs) must be filed with the relevant authorities within 30 days of detection.

[Missing Clause: Customer Identification Program (CIP)]

Section 8.1: Confidentiality: The institution will take reasonable measures to protect customer data.";

const REVISED_TEXT: &str = "\
Section 4.1: Customer Due Diligence (CDD) procedures must be applied to all new customers.

Section 4.2: Data Retention: All customer records shall be maintained for a period of seven years from the date of account closure.

Section 4.3: Customer Identification Program: The identity of every customer shall be verified against government-issued documentation before account opening.

Section 5.1: Suspicious Activity Reports (SARs) must be filed with the relevant authorities within 30 days of detection.

Section 8.1: Confidentiality: The institution will protect customer data with AES-256 encryption at rest and TLS 1.2 or later in transit.";

const AGREEMENT_BODY: &str = "\
**1. Parties:** This Agreement is made between [Your Company Name] (\"Disclosing Party\") and [Recipient Name] (\"Receiving Party\").

**2. Confidential Information:** \"Confidential Information\" shall include all financial, technical, and business information disclosed by the Disclosing Party.

**3. Obligations:** The Receiving Party shall hold and maintain the Confidential Information in strict confidence for the sole and exclusive benefit of the Disclosing Party.

**4. Term:** The non-disclosure provisions of this Agreement shall survive the termination of this Agreement and the Receiving Party's duty to hold Confidential Information in confidence shall remain in effect until the Confidential Information no longer qualifies as a trade secret or until the Disclosing Party sends the Receiving Party written notice releasing the Receiving Party from this Agreement, whichever occurs first.

**5. Governing Law:** This Agreement shall be governed by and construed in accordance with the laws of the State of [Your State/Jurisdiction].";

fn scripted_issues() -> Vec<Issue> {
    vec![
        Issue {
            kind: IssueKind::NonCompliantClause,
            severity: Severity::High,
            clause_ref: "Section 4.2: Data Retention".to_string(),
            suggestion: "Update data retention period to 7 years as per RBI regulations."
                .to_string(),
            risk: "Violation may lead to fines up to 2% of annual turnover.".to_string(),
        },
        Issue {
            kind: IssueKind::MissingClause,
            severity: Severity::Medium,
            clause_ref: "Customer Identification Program (CIP)".to_string(),
            suggestion: "Insert a standard CIP clause outlining identity verification procedures."
                .to_string(),
            risk: "Incomplete KYC process, potential for fraudulent accounts.".to_string(),
        },
        Issue {
            kind: IssueKind::VagueLanguage,
            severity: Severity::Low,
            clause_ref: "Section 8.1: Confidentiality".to_string(),
            suggestion: "Replace \"reasonable measures\" with specific encryption standards \
                         (e.g., \"AES-256 encryption\")."
                .to_string(),
            risk: "Potential for legal disputes over interpretation of \"reasonable\"."
                .to_string(),
        },
    ]
}

/// The pre-scripted engine.
///
/// `analyze` always returns the same three findings over the same policy
/// text regardless of which document was selected; `draft` interpolates the
/// template and industry names over a fixed agreement body. Determinism is
/// the point: downstream state machines behave identically on every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedCounsel;

impl ScriptedCounsel {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl CounselEngine for ScriptedCounsel {
    fn analyze(&self, document_name: &str) -> Findings {
        tracing::debug!(document = document_name, "producing scripted analysis");
        Findings {
            issues: scripted_issues(),
            score: 72,
            original_text: ORIGINAL_TEXT.to_string(),
            revised_text: REVISED_TEXT.to_string(),
        }
    }

    fn draft(&self, template_name: &str, industry_name: &str, requirements: &str) -> String {
        tracing::debug!(template = template_name, industry = industry_name, "producing scripted draft");
        let scope = if requirements.trim().is_empty() { "(not specified)" } else { requirements };
        format!(
            "**{}**\n\nPrepared for the {} industry.\n\nScope: {}\n\n{}",
            template_name.to_uppercase(),
            industry_name,
            scope,
            AGREEMENT_BODY
        )
    }
}
