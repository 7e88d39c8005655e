//! Session context shared by the component tree.

use shared::api::RentDeskClient;
use shared::{SessionManager, SessionState};
use wasm_bindgen_futures::spawn_local;
use yewdux::Dispatch;

use crate::api::LocalTokenStore;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

pub type WebSession = SessionManager<LocalTokenStore, RentDeskClient>;

/// Handle to the one session of the app, provided as a Yew context.
///
/// Every transition is mirrored into [`AppState`] so components can select
/// on it.
#[derive(Clone)]
pub struct AuthContext {
    manager: WebSession,
    dispatch: Dispatch<AppState>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.manager.ptr_eq(&other.manager)
    }
}

impl AuthContext {
    pub fn new(config: &FrontendConfig, dispatch: Dispatch<AppState>) -> Self {
        let manager = SessionManager::new(
            LocalTokenStore::new(config.token_storage_key.clone()),
            RentDeskClient::new(config.api_base_url()),
        );
        Self { manager, dispatch }
    }

    fn publish(&self, session: SessionState) {
        self.dispatch.reduce_mut(|state| state.session = session);
    }

    /// Settle the session from the stored token in the background.
    pub fn resolve(&self) {
        let this = self.clone();
        spawn_local(async move {
            this.manager.resolve().await;
            this.publish(this.manager.snapshot());
        });
    }

    /// Store `token` and resolve the session it describes.
    pub async fn login(&self, token: &str) -> SessionState {
        self.publish(SessionState::Loading);
        self.manager.login(token).await;
        let session = self.manager.snapshot();
        self.publish(session.clone());
        session
    }

    pub fn logout(&self) {
        self.publish(self.manager.logout());
    }

    pub fn token(&self) -> Option<String> {
        self.manager.token()
    }

    pub fn client(&self) -> RentDeskClient {
        self.manager.api().clone()
    }
}
