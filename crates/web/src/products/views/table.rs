use leptos::prelude::*;

use super::ProductRow;

#[component]
fn ActiveBadge(active: bool) -> impl IntoView {
    if active {
        view! { <span class="badge bg-success">"Active"</span> }.into_any()
    } else {
        view! { <span class="badge bg-danger">"Inactive"</span> }.into_any()
    }
}

#[component]
pub(super) fn ProductsTable(rows: Vec<ProductRow>, page: u32) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td colspan="5" class="text-center text-muted">"No products found."</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|ProductRow { id, name, price, active }| {
                view! {
                    <tr>
                        <td>{id}</td>
                        <td>{name}</td>
                        <td>{price}</td>
                        <td><ActiveBadge active=active /></td>
                        <td class="text-end">
                            <a
                                class="btn btn-sm btn-outline-primary me-1"
                                href=format!("/products/{id}/edit?page={page}")
                            >
                                "Edit"
                            </a>
                            <a
                                class="btn btn-sm btn-outline-danger"
                                href=format!("/products/{id}/delete?page={page}")
                            >
                                "Delete"
                            </a>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="table table-striped align-middle">
            <thead>
                <tr>
                    <th scope="col">"ID"</th>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Price"</th>
                    <th scope="col">"Active"</th>
                    <th scope="col" class="text-end">"Actions"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
