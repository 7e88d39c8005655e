use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Root} classes="btn btn-primary">{ "Back to the dashboard" }</Link<Route>>
        </div>
    }
}
