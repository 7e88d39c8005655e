use shared::SessionState;
use yewdux::Store;

/// Published copy of the session for selectors.
///
/// Written only by [`crate::session::AuthContext`].
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: SessionState,
}
