use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::session::AuthContext;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let auth = use_context::<AuthContext>();
    let user_state = use_selector(|state: &AppState| state.session.user().cloned());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(auth) = &auth {
            auth.logout();
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.full_name() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                    <div class="badge badge-outline badge-sm mt-1">{ user.role.as_str() }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a {onclick}>{"Log out"}</a></li>
            </ul>
        </div>
    }
}
