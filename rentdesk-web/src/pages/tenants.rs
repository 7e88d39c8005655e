use yew::{Html, function_component, html};

use crate::api::{render_fetch, use_fetch};
use crate::components::DataTable;

#[function_component(TenantsPage)]
pub fn tenants_page() -> Html {
    let tenants = use_fetch(|client, token| async move { client.list_tenants(&token).await });

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ "Tenants" }</h1>
            { render_fetch(&*tenants, |tenants| html! {
                <DataTable headers={vec!["Name", "Email", "Phone"]}>
                    { for tenants.iter().map(|tenant| html! {
                        <tr key={tenant.id.to_string()}>
                            <td class="font-medium">{ tenant.full_name() }</td>
                            <td>{ &tenant.email }</td>
                            <td>{ tenant.phone.clone().unwrap_or_default() }</td>
                        </tr>
                    }) }
                </DataTable>
            }) }
        </div>
    }
}
