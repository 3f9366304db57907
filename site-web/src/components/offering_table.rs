//! Summary table of the same offerings, one row each.

use leptos::prelude::*;
use shared::render::{table_view, TABLE_HEADERS};

use crate::state::site::use_site_context;

#[component]
pub fn OfferingTable() -> impl IntoView {
    let rows = use_site_context().market.with_value(|market| {
        table_view(&market.catalog)
            .iter()
            .map(|row| {
                let cells = row
                    .cells()
                    .into_iter()
                    .map(|cell| view! { <td>{cell.to_string()}</td> })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    });

    view! {
        <div class="offering-table-wrap">
            <table class="offering-table">
                <thead>
                    <tr>
                        {TABLE_HEADERS.into_iter().map(|header| view! { <th scope="col">{header}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
