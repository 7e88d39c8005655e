use shared::models::Role;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::Route,
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let role = use_selector(|state: &AppState| state.session.role());

    let home = match *role {
        Some(Role::Tenant) => Route::TenantDashboard,
        Some(_) => Route::OwnerDashboard,
        None => Route::Login,
    };
    let header_routes: &[Route] = if home == Route::OwnerDashboard {
        &Route::OWNER_NAV
    } else {
        &[]
    };

    let render_routes = |routes: &[Route]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem current_route={props.current_route} route={*route} />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={home} classes="btn btn-ghost text-lg">
                {"RentDesk"}
            </Link<Route>>
            if !header_routes.is_empty() {
                <>
                <div class="dropdown dropdown-end lg:hidden">
                    <button class="btn btn-soft">
                        <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-5 h-5" />
                    </button>
                    <ul
                        tabindex="0"
                        class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                    >
                        { render_routes(header_routes) }
                    </ul>
                </div>
                <ul class="hidden menu lg:menu-horizontal">
                    { render_routes(header_routes) }
                </ul>
                </>
            }
            <UserDropdown />
        </nav>
    }
}
