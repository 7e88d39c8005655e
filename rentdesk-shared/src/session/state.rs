use crate::models::{Profile, Role};

/// Immutable snapshot of the client session.
///
/// `Authenticated` holds the profile whose `role` is the session role, so an
/// authenticated snapshot can never disagree with itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The persisted token has not been checked yet.
    #[default]
    Loading,
    /// A valid token and profile with an owner or tenant role.
    Authenticated {
        user: Profile,
    },
    /// No usable token.
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn authenticated(user: Profile) -> Self {
        Self::Authenticated { user }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Authenticated { .. } => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}
