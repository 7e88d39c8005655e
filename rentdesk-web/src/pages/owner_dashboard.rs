use yew::{Html, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::{render_fetch, use_fetch};
use crate::components::PaymentStatisticsCard;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Landing page of owners: payment totals and shortcuts to each area.
#[function_component(OwnerDashboardPage)]
pub fn owner_dashboard_page() -> Html {
    let user = use_selector(|state: &AppState| state.session.user().cloned());
    let payments =
        use_fetch(|client, token| async move { client.list_payments(&token).await });

    let greeting = (*user)
        .as_ref()
        .map_or_else(|| "Dashboard".to_string(), |user| format!("Welcome, {}", user.first_name));

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ greeting }</h1>

            { render_fetch(&*payments, |payments| html! {
                <PaymentStatisticsCard payments={payments.clone()} />
            }) }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for Route::OWNER_NAV.iter().skip(1).map(|route| html! {
                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={route.icon()} class="w-6 h-6" />
                                { route.title() }
                            </h2>
                            <div class="card-actions justify-end">
                                <Link<Route> to={*route} classes="btn btn-primary btn-sm">
                                    { "Open" }
                                </Link<Route>>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
