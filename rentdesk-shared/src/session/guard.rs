use super::SessionState;
use crate::models::Role;

/// Navigation targets the guard can send a viewer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Login,
    OwnerDashboard,
    TenantDashboard,
}

impl NavTarget {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::OwnerDashboard => "/dashboard",
            Self::TenantDashboard => "/dashboard/tenant",
        }
    }

    /// Landing page of a signed-in role.
    #[must_use]
    pub const fn landing_for(role: Role) -> Self {
        match role {
            Role::Tenant => Self::TenantDashboard,
            Role::Owner | Role::Admin => Self::OwnerDashboard,
        }
    }
}

/// Outcome of checking a session against a protected subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still resolving; show a placeholder.
    Pending,
    /// Render the protected content.
    Allow,
    /// Navigate away without rendering the protected content.
    Redirect(NavTarget),
}

/// Decide what a guarded subtree shows for `session`.
///
/// An empty `allowed` slice admits any authenticated role.
#[must_use]
pub fn authorize(session: &SessionState, allowed: &[Role]) -> GuardDecision {
    match session {
        SessionState::Loading => GuardDecision::Pending,
        SessionState::Unauthenticated => GuardDecision::Redirect(NavTarget::Login),
        SessionState::Authenticated { user } => {
            if allowed.is_empty() || allowed.contains(&user.role) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(NavTarget::landing_for(user.role))
            }
        }
    }
}
