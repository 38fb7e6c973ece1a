//! Role-based navigation: the page gate and the router.
//!
//! Every page carries a static role allowlist. The gate is a pure, total
//! lookup; the router applies it together with the configured
//! [`AccessPolicy`] to decide which page is active.

use serde::{Deserialize, Serialize};

use super::session::Role;

/// Identifies a view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    /// Credential entry. The only page reachable while unauthenticated.
    Login,

    /// Metrics and recent documents.
    Dashboard,

    /// Document upload and compliance analysis.
    Review,

    /// AI-assisted document drafting.
    Draft,

    /// Rule and template administration.
    Templates,

    /// Report generation.
    Reports,

    /// Profile and system settings.
    Settings,

    /// Webhook and export integrations.
    Integrations,

    /// Pseudo-page shown when a request is refused under
    /// [`AccessPolicy::DenyPage`]. Never part of the menu.
    AccessDenied,
}

impl PageId {
    /// The pages offered in the navigation menu, in display order.
    pub const MENU: [PageId; 7] = [
        PageId::Dashboard,
        PageId::Review,
        PageId::Draft,
        PageId::Templates,
        PageId::Reports,
        PageId::Settings,
        PageId::Integrations,
    ];

    /// Stable identifier used in config and snapshots.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Review => "review",
            Self::Draft => "draft",
            Self::Templates => "templates",
            Self::Reports => "reports",
            Self::Settings => "settings",
            Self::Integrations => "integrations",
            Self::AccessDenied => "access-denied",
        }
    }

    /// Menu label.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Dashboard => "Dashboard",
            Self::Review => "Document Review",
            Self::Draft => "AI Document Drafting",
            Self::Templates => "Rules & Templates",
            Self::Reports => "Reporting",
            Self::Settings => "Settings",
            Self::Integrations => "Integrations",
            Self::AccessDenied => "Access Denied",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// What happens when a role requests a page outside its allowlist.
///
/// Both behaviors exist in the product; the integrator picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessPolicy {
    /// Disallowed pages are filtered out of the menu and a denied request
    /// silently keeps the prior page active.
    #[default]
    FilterMenu,

    /// The request is accepted but routes to the access-denied page.
    DenyPage,
}

/// Whether `role` may view `page`.
///
/// Total over every defined page: anything without an explicit allowlist
/// (the access-denied pseudo-page) fails closed.
pub fn is_allowed(role: Role, page: PageId) -> bool {
    match page {
        PageId::Login | PageId::Dashboard | PageId::Settings => true,
        PageId::Review => {
            matches!(role, Role::Admin | Role::ComplianceOfficer | Role::Reviewer)
        }
        PageId::Draft | PageId::Reports | PageId::Integrations => {
            matches!(role, Role::Admin | Role::ComplianceOfficer)
        }
        PageId::Templates => matches!(role, Role::Admin),
        PageId::AccessDenied => false,
    }
}

/// The menu pages visible to `role`, in display order.
pub fn visible_pages(role: Role) -> Vec<PageId> {
    PageId::MENU.iter().copied().filter(|page| is_allowed(role, *page)).collect()
}

/// Top-level page selection.
///
/// Holds the currently active page and applies the gate plus the configured
/// policy on every navigation request.
#[derive(Debug, Clone)]
pub struct Router {
    policy: AccessPolicy,
    current: PageId,
}

impl Router {
    /// Create a router on the login page.
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy, current: PageId::Login }
    }

    /// The active page.
    pub fn current(&self) -> PageId {
        self.current
    }

    /// The configured denial policy.
    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Route to the dashboard after a successful login.
    pub fn on_login(&mut self) {
        self.current = PageId::Dashboard;
    }

    /// Route back to the login page after logout.
    pub fn on_logout(&mut self) {
        self.current = PageId::Login;
    }

    /// Request a page and return the now-active one.
    ///
    /// While unauthenticated only the login page is reachable. A denied
    /// request either keeps the prior page ([`AccessPolicy::FilterMenu`]) or
    /// routes to the access-denied page ([`AccessPolicy::DenyPage`]).
    pub fn navigate(&mut self, role: Option<Role>, requested: PageId) -> PageId {
        let Some(role) = role else {
            self.current = PageId::Login;
            return self.current;
        };

        if is_allowed(role, requested) {
            tracing::debug!(page = %requested, "navigated");
            self.current = requested;
        } else {
            tracing::warn!(page = %requested, %role, "navigation refused");
            if self.policy == AccessPolicy::DenyPage {
                self.current = PageId::AccessDenied;
            }
        }

        self.current
    }
}
