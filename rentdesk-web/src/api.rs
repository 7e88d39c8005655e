//! Browser plumbing around the shared API client.

use std::future::Future;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use shared::api::{ApiError, RentDeskClient};
use shared::session::{StoreError, TokenStore};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, UseStateHandle, hook, html, use_context, use_effect_with, use_state};

use crate::components::loading::Loading;
use crate::session::AuthContext;

/// Bearer token kept as a raw string in `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// State of a list request issued by a page.
#[derive(Debug)]
pub enum Fetch<T> {
    Loading,
    Loaded(Rc<[T]>),
    Failed(String),
}

/// Message shown for a failed backend call.
pub fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401 | 403, .. } => {
            "Your session does not allow this request.".to_string()
        }
        ApiError::Status {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Status { status, .. } => format!("Request failed with status {status}"),
        ApiError::Network(_) => "Unable to connect to server".to_string(),
        ApiError::Decode(_) => "Unexpected response from server".to_string(),
    }
}

/// Run `fetch` once with the session token and track its result.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch: F) -> UseStateHandle<Fetch<T>>
where
    T: 'static,
    F: FnOnce(RentDeskClient, String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let auth = use_context::<AuthContext>();
    let state = use_state(|| Fetch::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match auth.as_ref().and_then(|auth| auth.token().map(|token| (auth.client(), token))) {
                Some((client, token)) => spawn_local(async move {
                    match fetch(client, token).await {
                        Ok(items) => state.set(Fetch::Loaded(items.into())),
                        Err(err) => {
                            log::warn!("request failed: {err}");
                            state.set(Fetch::Failed(describe_error(&err)));
                        }
                    }
                }),
                None => state.set(Fetch::Failed("Not signed in".to_string())),
            }
            || ()
        });
    }
    state
}

/// Render a fetch state, delegating loaded items to `view`.
pub fn render_fetch<T>(state: &Fetch<T>, view: impl FnOnce(&Rc<[T]>) -> Html) -> Html {
    match state {
        Fetch::Loading => html! { <Loading /> },
        Fetch::Failed(message) => html! {
            <div class="alert alert-error">
                <span>{ message.clone() }</span>
            </div>
        },
        Fetch::Loaded(items) if items.is_empty() => html! {
            <p class="text-base-content/70">{ "Nothing to show yet." }</p>
        },
        Fetch::Loaded(items) => view(items),
    }
}
