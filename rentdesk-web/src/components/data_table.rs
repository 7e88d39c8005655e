use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub headers: Vec<&'static str>,
    #[prop_or_default]
    pub children: Html,
}

/// Zebra table with a fixed header row; rows come in as children.
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        { for props.headers.iter().map(|header| html! { <th>{ *header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { props.children.clone() }
                </tbody>
            </table>
        </div>
    }
}
