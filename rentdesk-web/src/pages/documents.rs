use shared::format::{DateStyle, format_date};
use yew::{Html, function_component, html};

use crate::api::{render_fetch, use_fetch};
use crate::components::DataTable;

#[function_component(DocumentsPage)]
pub fn documents_page() -> Html {
    let documents =
        use_fetch(|client, token| async move { client.list_documents(&token).await });

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ "Documents" }</h1>
            { render_fetch(&*documents, |documents| html! {
                <DataTable headers={vec!["File", "Type", "Created"]}>
                    { for documents.iter().map(|document| html! {
                        <tr key={document.id.to_string()}>
                            <td class="font-medium">
                                {
                                    match &document.download_url {
                                        Some(url) => html! { <a class="link" href={url.clone()}>{ &document.file_name }</a> },
                                        None => html! { { &document.file_name } },
                                    }
                                }
                            </td>
                            <td>{ document.document_type.as_str() }</td>
                            <td>{ format_date(document.created_at.date_naive(), DateStyle::Long) }</td>
                        </tr>
                    }) }
                </DataTable>
            }) }
        </div>
    }
}
