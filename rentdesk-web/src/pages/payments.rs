use shared::format::{DateStyle, format_currency, format_date};
use shared::models::PaymentStatus;
use yew::{Html, function_component, html};

use crate::api::{render_fetch, use_fetch};
use crate::components::{DataTable, PaymentStatisticsCard};
use crate::config::FrontendConfig;

fn status_badge(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "badge badge-success",
        PaymentStatus::Pending => "badge badge-warning",
        PaymentStatus::Late => "badge badge-error",
        PaymentStatus::Partial | PaymentStatus::Cancelled | PaymentStatus::Other(_) => {
            "badge badge-ghost"
        }
    }
}

#[function_component(PaymentsPage)]
pub fn payments_page() -> Html {
    let payments = use_fetch(|client, token| async move { client.list_payments(&token).await });
    let currency = FrontendConfig::new().currency;

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ "Payments" }</h1>
            { render_fetch(&*payments, |payments| html! {
                <>
                    <PaymentStatisticsCard payments={payments.clone()} />
                    <DataTable headers={vec!["Due", "Amount", "Status", "Method", "Reference"]}>
                        { for payments.iter().map(|payment| html! {
                            <tr key={payment.id.to_string()}>
                                <td>{ payment.due_date.map(|date| format_date(date, DateStyle::Numeric)).unwrap_or_default() }</td>
                                <td>{ format_currency(payment.amount, &currency) }</td>
                                <td><span class={status_badge(&payment.status)}>{ payment.status.to_string() }</span></td>
                                <td>{ payment.payment_method.map(|method| method.as_str()).unwrap_or_default() }</td>
                                <td>{ payment.reference.clone().unwrap_or_default() }</td>
                            </tr>
                        }) }
                    </DataTable>
                </>
            }) }
        </div>
    }
}
