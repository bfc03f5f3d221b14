use leptos::prelude::*;

use super::{
    ModalView, PaginationLinks, ProductRow,
    flash::Flash,
    modals::{DeleteModal, EditorModal},
    pagination::PaginationNav,
    table::ProductsTable,
};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

#[component]
pub(super) fn ProductsPage(
    rows: Vec<ProductRow>,
    pagination: PaginationLinks,
    modal: ModalView,
    notice: Option<&'static str>,
    page: u32,
) -> impl IntoView {
    let close_href = format!("/products?page={page}");

    let modal = match modal {
        ModalView::Closed => ().into_any(),
        ModalView::Editor(editor) => view! {
            <EditorModal editor=editor close_href=close_href />
        }
        .into_any(),
        ModalView::ConfirmDelete { action } => view! {
            <DeleteModal action=action close_href=close_href />
        }
        .into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Products"</title>
                <link rel="stylesheet" href=BOOTSTRAP_CSS />
            </head>
            <body>
                <main class="container py-4">
                    {notice.map(|message| view! { <Flash message=message /> })}
                    <div class="d-flex justify-content-between align-items-center mb-3">
                        <h1 class="h3 mb-0">"Products"</h1>
                        <a class="btn btn-primary" href=format!("/products/create?page={page}")>
                            "Add Product"
                        </a>
                    </div>
                    <ProductsTable rows=rows page=page />
                    <PaginationNav links=pagination />
                </main>
                {modal}
                <script src=BOOTSTRAP_JS></script>
            </body>
        </html>
    }
}
