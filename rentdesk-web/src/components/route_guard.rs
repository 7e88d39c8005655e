use shared::models::Role;
use shared::{GuardDecision, authorize};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Roles admitted to the children; empty admits any signed-in role.
    #[prop_or_default]
    pub allowed_roles: Vec<Role>,
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only for a session the roles admit.
///
/// While the session resolves a loading indicator is shown. Otherwise the
/// viewer is sent to the login page or to their own landing page, replacing
/// the current history entry.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let navigator = use_navigator();
    let decision = authorize(&session, &props.allowed_roles);

    use_effect_with(decision, move |decision| {
        if let (GuardDecision::Redirect(target), Some(navigator)) = (decision, navigator) {
            log::debug!("guard redirecting to {}", target.path());
            navigator.replace(&Route::from(*target));
        }
        || ()
    });

    match decision {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::Allow => props.children.clone(),
        GuardDecision::Redirect(_) => html! {},
    }
}
