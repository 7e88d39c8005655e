use std::time::Duration;

use shared::SessionState;
use shared::models::{EntityId, Profile, Role};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yewdux::YewduxRoot;
use yewdux::prelude::use_dispatch;

use crate::components::route_guard::RouteGuard;
use crate::models::app_state::AppState;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    session: SessionState,
    allowed_roles: Vec<Role>,
    history: MemoryHistory,
}

#[function_component(Seed)]
fn seed(props: &HarnessProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    use_effect_with(props.session.clone(), move |session| {
        dispatch.reduce_mut(|state| state.session = session.clone());
        || ()
    });

    html! {
        <Router history={AnyHistory::from(props.history.clone())}>
            <RouteGuard allowed_roles={props.allowed_roles.clone()}>
                <p>{ "protected content" }</p>
            </RouteGuard>
        </Router>
    }
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    html! {
        <YewduxRoot>
            <Seed
                session={props.session.clone()}
                allowed_roles={props.allowed_roles.clone()}
                history={props.history.clone()}
            />
        </YewduxRoot>
    }
}

fn signed_in(role: Role) -> SessionState {
    SessionState::authenticated(Profile {
        id: EntityId::Numeric(1),
        email: "someone@example.com".into(),
        first_name: "Some".into(),
        last_name: "One".into(),
        role,
    })
}

/// Mount the guard with `session` published and return the rendered markup
/// and the path the router ended on.
async fn mount(session: SessionState, allowed_roles: Vec<Role>) -> (String, String) {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let history = MemoryHistory::new();
    let props = HarnessProps {
        session,
        allowed_roles,
        history: history.clone(),
    };
    let handle = yew::Renderer::<Harness>::with_root_and_props(root.clone(), props).render();
    sleep(Duration::from_millis(50)).await;

    let markup = root.inner_html();
    let path = history.location().path().to_string();
    handle.destroy();
    root.remove();
    (markup, path)
}

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|window| window.document())
        .unwrap()
}

#[wasm_bindgen_test]
async fn loading_session_shows_placeholder_and_stays() {
    let (markup, path) = mount(SessionState::Loading, vec![Role::Owner]).await;

    assert!(markup.contains("Loading"));
    assert!(!markup.contains("protected content"));
    assert_eq!(path, "/");
}

#[wasm_bindgen_test]
async fn logged_out_viewer_is_sent_to_login() {
    let (markup, path) = mount(SessionState::Unauthenticated, vec![Role::Owner]).await;

    assert!(!markup.contains("protected content"));
    assert_eq!(path, "/auth/login");
}

#[wasm_bindgen_test]
async fn tenant_on_owner_page_lands_on_tenant_dashboard() {
    let (markup, path) = mount(signed_in(Role::Tenant), vec![Role::Owner]).await;

    assert!(!markup.contains("protected content"));
    assert_eq!(path, "/dashboard/tenant");
}

#[wasm_bindgen_test]
async fn allowed_role_sees_children_in_place() {
    let (markup, path) = mount(signed_in(Role::Owner), vec![Role::Owner]).await;

    assert!(markup.contains("protected content"));
    assert_eq!(path, "/");
}
