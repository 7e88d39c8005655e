use chrono::Utc;
use shared::format::{DateStyle, format_currency, format_date};
use yew::{Html, function_component, html};

use crate::api::{render_fetch, use_fetch};
use crate::components::DataTable;
use crate::config::FrontendConfig;

#[function_component(RentalsPage)]
pub fn rentals_page() -> Html {
    let rentals = use_fetch(|client, token| async move { client.list_rentals(&token).await });
    let currency = FrontendConfig::new().currency;
    let today = Utc::now().date_naive();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ "Rentals" }</h1>
            { render_fetch(&*rentals, |rentals| html! {
                <DataTable headers={vec!["Property", "Tenant", "Period", "Monthly", "Status"]}>
                    { for rentals.iter().map(|rental| {
                        let property = rental
                            .property
                            .as_ref()
                            .map_or_else(|| rental.property_id.to_string(), |property| property.name.clone());
                        let tenant = rental
                            .tenant
                            .as_ref()
                            .map_or_else(|| rental.tenant_id.to_string(), shared::models::Tenant::full_name);
                        let period = match rental.end_date {
                            Some(end) => format!(
                                "{} - {}",
                                format_date(rental.start_date, DateStyle::Numeric),
                                format_date(end, DateStyle::Numeric)
                            ),
                            None => format!("since {}", format_date(rental.start_date, DateStyle::Numeric)),
                        };
                        html! {
                            <tr key={rental.id.to_string()}>
                                <td class="font-medium">{ property }</td>
                                <td>{ tenant }</td>
                                <td>{ period }</td>
                                <td>{ format_currency(rental.monthly_total(), &currency) }</td>
                                <td>
                                    <span class={if rental.is_running_on(today) { "badge badge-success" } else { "badge badge-ghost" }}>
                                        { rental.status.as_str() }
                                    </span>
                                </td>
                            </tr>
                        }
                    }) }
                </DataTable>
            }) }
        </div>
    }
}
