use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route == Some(props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<Route> to={props.route} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={props.route.icon()} class="w-5 h-5" />
              { props.route.title() }
          </Link<Route>>
      </li>
    }
}
