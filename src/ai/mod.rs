//! The "AI" seam.
//!
//! Document analysis and draft generation go through the [`CounselEngine`]
//! trait. The shipped implementation, [`ScriptedCounsel`], returns fixed
//! payloads: there is no parsing, no rule evaluation, and no inference
//! anywhere in this system. The seam exists so the workflows never know
//! that.

mod scripted;

pub use scripted::ScriptedCounsel;

use serde::Serialize;

/// Severity of a compliance issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Likely regulatory violation.
    High,

    /// Gap that weakens the document.
    Medium,

    /// Wording that invites dispute.
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        write!(f, "{name}")
    }
}

/// Category of a compliance issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A clause conflicts with a known rule.
    NonCompliantClause,

    /// A required clause is absent.
    MissingClause,

    /// A clause is too imprecise to enforce.
    VagueLanguage,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NonCompliantClause => "Non-Compliant Clause",
            Self::MissingClause => "Missing Clause",
            Self::VagueLanguage => "Vague Language",
        };
        write!(f, "{name}")
    }
}

/// One finding of a document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Issue category.
    pub kind: IssueKind,

    /// Severity.
    pub severity: Severity,

    /// The clause (or missing clause) the finding refers to.
    pub clause_ref: String,

    /// Suggested remediation.
    pub suggestion: String,

    /// Risk of leaving the issue unaddressed.
    pub risk: String,
}

/// Structured output of a document analysis.
///
/// Issues keep the order the engine produced them in; the core never
/// re-sorts them by severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Findings {
    /// Detected issues, in engine order.
    pub issues: Vec<Issue>,

    /// Overall compliance score, 0..=100.
    pub score: u8,

    /// The document text as submitted.
    pub original_text: String,

    /// The document text with suggestions applied.
    pub revised_text: String,
}

/// Produces analysis findings and document drafts.
///
/// Implementations are pure producers: the async task runner owns the
/// latency and the lifecycle, the engine only computes the payload.
pub trait CounselEngine: Send + Sync {
    /// Analyze a document, identified by its display name.
    fn analyze(&self, document_name: &str) -> Findings;

    /// Draft a document from a template, interpolating the template and
    /// industry names and the free-form requirements.
    fn draft(&self, template_name: &str, industry_name: &str, requirements: &str) -> String;
}
