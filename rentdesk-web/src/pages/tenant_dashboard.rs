use shared::format::{DateStyle, format_currency, format_date};
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

use crate::api::{render_fetch, use_fetch};
use crate::components::{DataTable, PaymentStatisticsCard};
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

/// Landing page of tenants: their own payments.
#[function_component(TenantDashboardPage)]
pub fn tenant_dashboard_page() -> Html {
    let user = use_selector(|state: &AppState| state.session.user().cloned());
    let payments =
        use_fetch(|client, token| async move { client.list_payments(&token).await });
    let currency = FrontendConfig::new().currency;

    let name = (*user)
        .as_ref()
        .map(shared::models::Profile::full_name)
        .unwrap_or_default();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ format!("Hello {name}") }</h1>
            <p class="text-base-content/70">{ "Here are the payments of your rentals." }</p>
            { render_fetch(&*payments, |payments| html! {
                <>
                    <PaymentStatisticsCard payments={payments.clone()} />
                    <DataTable headers={vec!["Due", "Amount", "Status", "Paid on"]}>
                        { for payments.iter().map(|payment| html! {
                            <tr key={payment.id.to_string()}>
                                <td>{ payment.due_date.map(|date| format_date(date, DateStyle::Numeric)).unwrap_or_default() }</td>
                                <td>{ format_currency(payment.amount, &currency) }</td>
                                <td>{ payment.status.to_string() }</td>
                                <td>{ payment.payment_date.map(|date| format_date(date, DateStyle::Numeric)).unwrap_or_else(|| "-".to_string()) }</td>
                            </tr>
                        }) }
                    </DataTable>
                </>
            }) }
        </div>
    }
}
