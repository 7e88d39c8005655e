use shared::models::Role;
use shared::{GuardDecision, NavTarget, authorize};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::components::route_guard::RouteGuard;
use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::pages::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/auth/login")]
    Login,
    #[at("/dashboard")]
    OwnerDashboard,
    #[at("/dashboard/tenant")]
    TenantDashboard,
    #[at("/dashboard/properties")]
    Properties,
    #[at("/dashboard/tenants")]
    Tenants,
    #[at("/dashboard/rentals")]
    Rentals,
    #[at("/dashboard/payments")]
    Payments,
    #[at("/dashboard/documents")]
    Documents,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Login => Self::Login,
            NavTarget::OwnerDashboard => Self::OwnerDashboard,
            NavTarget::TenantDashboard => Self::TenantDashboard,
        }
    }
}

impl Route {
    /// Header entries of the owner area, in display order.
    pub const OWNER_NAV: [Self; 6] = [
        Self::OwnerDashboard,
        Self::Properties,
        Self::Tenants,
        Self::Rentals,
        Self::Payments,
        Self::Documents,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Root | Self::OwnerDashboard | Self::TenantDashboard => "Dashboard",
            Self::Login => "Sign in",
            Self::Properties => "Properties",
            Self::Tenants => "Tenants",
            Self::Rentals => "Rentals",
            Self::Payments => "Payments",
            Self::Documents => "Documents",
            Self::NotFound => "Not found",
        }
    }

    pub const fn icon(self) -> IconId {
        match self {
            Self::Root | Self::OwnerDashboard | Self::TenantDashboard => {
                IconId::HeroiconsOutlineHome
            }
            Self::Login => IconId::HeroiconsOutlineArrowRightOnRectangle,
            Self::Properties => IconId::HeroiconsOutlineBuildingOffice2,
            Self::Tenants => IconId::HeroiconsOutlineUsers,
            Self::Rentals => IconId::HeroiconsOutlineKey,
            Self::Payments => IconId::HeroiconsOutlineBanknotes,
            Self::Documents => IconId::HeroiconsOutlineDocumentText,
            Self::NotFound => IconId::HeroiconsOutlineExclamationTriangle,
        }
    }

    /// Roles admitted to the route. `None` for public routes, an empty
    /// slice for any signed-in role.
    pub const fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Login | Self::Root | Self::NotFound => None,
            Self::TenantDashboard => Some(&[Role::Tenant]),
            Self::OwnerDashboard
            | Self::Properties
            | Self::Tenants
            | Self::Rentals
            | Self::Payments
            | Self::Documents => Some(&[Role::Owner]),
        }
    }
}

/// Sends `/` to the landing page of the current session.
#[function_component(RootRedirect)]
fn root_redirect() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    match authorize(&session, &[]) {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::Redirect(target) => html! { <Redirect<Route> to={Route::from(target)} /> },
        GuardDecision::Allow => match session.role() {
            Some(role) => {
                html! { <Redirect<Route> to={Route::from(NavTarget::landing_for(role))} /> }
            }
            None => html! { <Redirect<Route> to={Route::Login} /> },
        },
    }
}

/// Shows the login form, or forwards a signed-in viewer to their landing page.
#[function_component(LoginRoute)]
fn login_route() -> Html {
    let role = use_selector(|state: &AppState| state.session.role());
    match *role {
        Some(role) => html! { <Redirect<Route> to={Route::from(NavTarget::landing_for(role))} /> },
        None => html! { <LoginPage /> },
    }
}

fn guarded(route: Route, page: Html) -> Html {
    let allowed_roles = route.allowed_roles().unwrap_or_default().to_vec();
    html! {
        <RouteGuard {allowed_roles}>
            <Layout current_route={route}>
                { page }
            </Layout>
        </RouteGuard>
    }
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route {route:?}");
    match route {
        Route::Root => html! { <RootRedirect /> },
        Route::Login => html! { <LoginRoute /> },
        Route::OwnerDashboard => guarded(route, html! { <OwnerDashboardPage /> }),
        Route::TenantDashboard => guarded(route, html! { <TenantDashboardPage /> }),
        Route::Properties => guarded(route, html! { <PropertiesPage /> }),
        Route::Tenants => guarded(route, html! { <TenantsPage /> }),
        Route::Rentals => guarded(route, html! { <RentalsPage /> }),
        Route::Payments => guarded(route, html! { <PaymentsPage /> }),
        Route::Documents => guarded(route, html! { <DocumentsPage /> }),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
