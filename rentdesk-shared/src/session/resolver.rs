use std::{
    fmt,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::{debug, info, instrument, warn};

use super::{AuthFailure, SessionState, TokenStore, decode_claims};
use crate::api::ProfileApi;
use crate::models::{Profile, RoleClaim};

/// Owner of the client session lifecycle.
///
/// Created once at the application root and shared by cloning; every clone
/// drives the same session. Each `resolve`, `login` and `logout` starts a new
/// generation, and a resolve that finishes after a newer operation began
/// drops its result instead of overwriting the session or the stored token.
pub struct SessionManager<S, A> {
    inner: Arc<Inner<S, A>>,
}

struct Inner<S, A> {
    store: S,
    api: A,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl<S, A> Clone for SessionManager<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for SessionManager<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self
            .inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("SessionManager")
            .field("state", &state.phase())
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<S: TokenStore, A: ProfileApi> SessionManager<S, A> {
    /// Create a manager in the `Loading` state. Call [`Self::resolve`] to
    /// settle it.
    pub fn new(store: S, api: A) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                api,
                state: Mutex::new(SessionState::Loading),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The persisted token, ignoring blank values.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .store
            .load()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Backing token store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Backend client used for profile requests.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.inner.api
    }

    /// Whether both handles drive the same session.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Settle the session from the persisted token.
    ///
    /// Never fails: a missing or undecodable token, a role other than owner
    /// or tenant, and a failed profile request all end in
    /// [`SessionState::Unauthenticated`] with the token removed.
    #[instrument(skip(self), fields(generation = tracing::field::Empty))]
    pub async fn resolve(&self) -> SessionState {
        let generation = self.next_generation();
        tracing::Span::current().record("generation", generation);

        let outcome = self.authenticate().await;
        if !self.is_current(generation) {
            debug!("resolve superseded by a newer session operation");
            return self.snapshot();
        }

        let next = match outcome {
            Ok(user) => {
                info!(role = %user.role, "session authenticated");
                SessionState::authenticated(user)
            }
            Err(AuthFailure::NoToken) => {
                debug!("no persisted token");
                self.inner.store.clear();
                SessionState::Unauthenticated
            }
            Err(err) => {
                warn!(error = %err, "authentication failed, clearing persisted token");
                self.inner.store.clear();
                SessionState::Unauthenticated
            }
        };
        self.replace(next)
    }

    /// Persist `token` and resolve the session from it.
    #[instrument(skip_all)]
    pub async fn login(&self, token: &str) -> SessionState {
        if let Err(err) = self.inner.store.save(token.trim()) {
            warn!(error = %err, "could not persist token");
            self.next_generation();
            self.inner.store.clear();
            return self.replace(SessionState::Unauthenticated);
        }
        self.replace(SessionState::Loading);
        self.resolve().await
    }

    /// Drop the token and log out without contacting the backend.
    pub fn logout(&self) -> SessionState {
        self.next_generation();
        self.inner.store.clear();
        info!("session cleared");
        self.replace(SessionState::Unauthenticated)
    }

    async fn authenticate(&self) -> Result<Profile, AuthFailure> {
        let token = self.token().ok_or(AuthFailure::NoToken)?;
        let claims = decode_claims(&token)?;
        let role = claims
            .role_claim()
            .session_role()
            .ok_or_else(|| AuthFailure::InvalidRole(claims.role.clone()))?;
        debug!(%role, "token decoded, fetching profile");

        let response = self.inner.api.fetch_profile(&token).await?;
        if let Some(reported) = response.role.as_deref()
            && RoleClaim::from(reported).session_role() != Some(role)
        {
            warn!(
                token_role = %role,
                reported_role = reported,
                "backend profile reports a different role than the token"
            );
        }
        Ok(Profile::from_response(response, role))
    }

    fn next_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.generation.load(Ordering::SeqCst) == generation
    }

    fn replace(&self, next: SessionState) -> SessionState {
        let mut state = self
            .inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *state = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockProfileApi};
    use crate::models::{EntityId, ProfileResponse, Role};
    use crate::session::{MemoryTokenStore, unsigned_token};
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Notify;

    fn token_with_role(role: &str) -> String {
        unsigned_token(&json!({
            "sub": "17",
            "email": "someone@example.com",
            "role": role
        }))
    }

    fn profile_response() -> ProfileResponse {
        ProfileResponse {
            id: EntityId::Numeric(17),
            email: "someone@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: None,
        }
    }

    fn api_returning(result: Result<ProfileResponse, ApiError>) -> MockProfileApi {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile()
            .times(1)
            .returning(move |_| result.clone());
        api
    }

    fn api_never_called() -> MockProfileApi {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile().never();
        api
    }

    #[tokio::test]
    async fn no_token_resolves_logged_out_without_network() {
        let store = MemoryTokenStore::default();
        let manager = SessionManager::new(store.clone(), api_never_called());
        assert!(manager.snapshot().is_loading());

        let state = manager.resolve().await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(state.role(), None);
        assert_eq!(state.user(), None);
        assert_eq!(manager.snapshot(), state);
    }

    #[tokio::test]
    async fn blank_token_counts_as_missing() {
        let store = MemoryTokenStore::with_token("   ");
        let manager = SessionManager::new(store.clone(), api_never_called());

        assert_eq!(manager.resolve().await, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn owner_token_in_any_case_authenticates_as_owner() {
        let store = MemoryTokenStore::with_token(token_with_role("oWnEr"));
        let manager = SessionManager::new(store.clone(), api_returning(Ok(profile_response())));

        let state = manager.resolve().await;

        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.role(), Some(Role::Owner));
        assert_eq!(state.user().map(|user| user.role), Some(Role::Owner));
        assert_eq!(state.user().map(|user| user.email.as_str()), Some("someone@example.com"));
        assert!(store.load().is_some());
    }

    #[tokio::test]
    async fn tenant_token_authenticates_as_tenant() {
        let store = MemoryTokenStore::with_token(token_with_role("TENANT"));
        let manager = SessionManager::new(store, api_returning(Ok(profile_response())));

        assert_eq!(manager.resolve().await.role(), Some(Role::Tenant));
    }

    #[tokio::test]
    async fn token_role_wins_over_reported_role() {
        let store = MemoryTokenStore::with_token(token_with_role("owner"));
        let mut response = profile_response();
        response.role = Some("TENANT".to_string());
        let manager = SessionManager::new(store, api_returning(Ok(response)));

        assert_eq!(manager.resolve().await.role(), Some(Role::Owner));
    }

    #[tokio::test]
    async fn unrecognized_role_logs_out_and_removes_token() {
        let store = MemoryTokenStore::with_token(token_with_role("admin"));
        let manager = SessionManager::new(store.clone(), api_never_called());

        assert_eq!(manager.resolve().await, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn undecodable_token_logs_out_and_removes_token() {
        let store = MemoryTokenStore::with_token("definitely-not-a-jwt");
        let manager = SessionManager::new(store.clone(), api_never_called());

        assert_eq!(manager.resolve().await, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn rejected_profile_request_logs_out_and_removes_token() {
        let store = MemoryTokenStore::with_token(token_with_role("owner"));
        let manager = SessionManager::new(
            store.clone(),
            api_returning(Err(ApiError::Status {
                status: 401,
                message: Some("expired".into()),
            })),
        );

        assert_eq!(manager.resolve().await, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn network_failure_logs_out_and_removes_token() {
        let store = MemoryTokenStore::with_token(token_with_role("tenant"));
        let manager = SessionManager::new(
            store.clone(),
            api_returning(Err(ApiError::Network("connection refused".into()))),
        );

        assert_eq!(manager.resolve().await, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn login_persists_then_resolves() {
        let store = MemoryTokenStore::default();
        let manager = SessionManager::new(store.clone(), api_returning(Ok(profile_response())));
        let token = token_with_role("owner");

        let state = manager.login(&format!("  {token}\n")).await;

        assert_eq!(state.role(), Some(Role::Owner));
        assert_eq!(store.load(), Some(token));
    }

    #[tokio::test]
    async fn login_with_bad_role_ends_logged_out() {
        let store = MemoryTokenStore::default();
        let manager = SessionManager::new(store.clone(), api_never_called());

        let state = manager.login(&token_with_role("landlord")).await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn logout_clears_without_network() {
        let store = MemoryTokenStore::with_token(token_with_role("owner"));
        let manager = SessionManager::new(store.clone(), api_returning(Ok(profile_response())));
        assert!(manager.resolve().await.is_authenticated());

        let state = manager.logout();

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(manager.snapshot(), SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn clones_share_the_session() {
        let store = MemoryTokenStore::with_token(token_with_role("owner"));
        let manager = SessionManager::new(store, api_returning(Ok(profile_response())));
        let handle = manager.clone();

        handle.resolve().await;

        assert!(manager.ptr_eq(&handle));
        assert!(manager.snapshot().is_authenticated());
    }

    /// Profile API whose answer for one token waits until the test releases it.
    struct GatedApi {
        gate: Arc<Notify>,
        gated_token: String,
        gated_result: Result<ProfileResponse, ApiError>,
    }

    #[async_trait(?Send)]
    impl ProfileApi for GatedApi {
        async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, ApiError> {
            if token == self.gated_token {
                self.gate.notified().await;
                return self.gated_result.clone();
            }
            Ok(profile_response())
        }
    }

    #[tokio::test]
    async fn logout_during_resolve_wins() {
        let token = token_with_role("owner");
        let gate = Arc::new(Notify::new());
        let store = MemoryTokenStore::with_token(token.clone());
        let manager = SessionManager::new(
            store.clone(),
            GatedApi {
                gate: Arc::clone(&gate),
                gated_token: token,
                gated_result: Ok(profile_response()),
            },
        );

        let resolving = manager.resolve();
        let interrupt = async {
            tokio::task::yield_now().await;
            manager.logout();
            gate.notify_one();
        };
        let (state, ()) = tokio::join!(resolving, interrupt);

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(manager.snapshot(), SessionState::Unauthenticated);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn stale_failure_does_not_clobber_newer_login() {
        let stale = token_with_role("owner");
        let fresh = unsigned_token(&json!({ "sub": "18", "role": "tenant" }));
        let gate = Arc::new(Notify::new());
        let store = MemoryTokenStore::with_token(stale.clone());
        let manager = SessionManager::new(
            store.clone(),
            GatedApi {
                gate: Arc::clone(&gate),
                gated_token: stale,
                gated_result: Err(ApiError::Status {
                    status: 401,
                    message: None,
                }),
            },
        );

        let resolving = manager.resolve();
        let newer = async {
            tokio::task::yield_now().await;
            let state = manager.login(&fresh).await;
            gate.notify_one();
            state
        };
        let (stale_state, login_state) = tokio::join!(resolving, newer);

        assert_eq!(login_state.role(), Some(Role::Tenant));
        assert_eq!(stale_state, login_state);
        assert_eq!(manager.snapshot(), login_state);
        assert_eq!(store.load(), Some(fresh));
    }
}
