use shared::format::format_currency;
use yew::{Html, function_component, html};

use crate::api::{render_fetch, use_fetch};
use crate::components::DataTable;
use crate::config::FrontendConfig;

#[function_component(PropertiesPage)]
pub fn properties_page() -> Html {
    let properties =
        use_fetch(|client, token| async move { client.list_properties(&token).await });
    let currency = FrontendConfig::new().currency;

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ "Properties" }</h1>
            { render_fetch(&*properties, |properties| html! {
                <DataTable headers={vec!["Name", "Address", "Type", "Rent", "Status"]}>
                    { for properties.iter().map(|property| html! {
                        <tr key={property.id.to_string()}>
                            <td class="font-medium">{ &property.name }</td>
                            <td>{ property.full_address() }</td>
                            <td>{ property.property_type.map(|kind| format!("{kind:?}")).unwrap_or_default() }</td>
                            <td>{ format_currency(property.rent_amount, &currency) }</td>
                            <td>{ property.status.map(|status| format!("{status:?}")).unwrap_or_default() }</td>
                        </tr>
                    }) }
                </DataTable>
            }) }
        </div>
    }
}
