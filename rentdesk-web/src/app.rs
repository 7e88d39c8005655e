use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};
use crate::session::AuthContext;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let auth = use_memo((), move |_| AuthContext::new(&FrontendConfig::new(), dispatch));

    {
        let auth = (*auth).clone();
        use_effect_with((), move |_| {
            auth.resolve();
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={(*auth).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AuthContext>>
    }
}
