//! Server-rendered products screen.
//!
//! The component's state is flattened into plain view models here so the
//! leptos components below only deal with strings, numbers and flags.

use catalog_app::{
    components::products::{EditTarget, Modal, Notice, ProductsComponent},
    domain::{pagination::Page, products::records::ProductRecord},
};
use leptos::{prelude::*, reactive::owner::Owner, tachys::view::RenderHtml};

mod flash;
mod modals;
mod page;
mod pagination;
mod table;

use page::ProductsPage;

/// One table row.
#[derive(Debug, Clone)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub active: bool,
}

impl From<&ProductRecord> for ProductRow {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            price: format!("{:.2}", product.price),
            active: product.active,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PaginationLinks {
    pub current: u32,
    pub pages: Vec<u32>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> From<&Page<T>> for PaginationLinks {
    fn from(page: &Page<T>) -> Self {
        Self {
            current: page.page(),
            pages: page.pages().collect(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EditorView {
    pub title: &'static str,
    pub action: String,
    pub name: String,
    pub price: String,
    pub active: bool,
    pub name_error: Option<String>,
    pub price_error: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) enum ModalView {
    Closed,
    Editor(EditorView),
    ConfirmDelete { action: String },
}

impl ModalView {
    fn from_component(component: &ProductsComponent) -> Self {
        let page = component.page().page();

        match component.modal() {
            Modal::Closed => Self::Closed,
            Modal::ConfirmDelete(id) => Self::ConfirmDelete {
                action: format!("/products/{id}/delete?page={page}"),
            },
            Modal::Editor => {
                let form = component.form();
                let errors = component.errors();

                let (title, action) = match form.target() {
                    EditTarget::Draft => ("Add Product", format!("/products?page={page}")),
                    EditTarget::Existing(id) => {
                        ("Edit Product", format!("/products/{id}?page={page}"))
                    }
                };

                Self::Editor(EditorView {
                    title,
                    action,
                    name: form.name().to_string(),
                    price: form.price().to_string(),
                    active: form.is_active(),
                    name_error: errors.get("name").map(ToString::to_string),
                    price_error: errors.get("price").map(ToString::to_string),
                })
            }
        }
    }
}

/// Render the full products document for the component's current state.
pub(crate) fn render_page(
    component: &ProductsComponent,
    products: &Page<ProductRecord>,
    notice: Option<Notice>,
) -> String {
    let rows: Vec<ProductRow> = products.items.iter().map(ProductRow::from).collect();
    let pagination = PaginationLinks::from(products);
    let modal = ModalView::from_component(component);
    let notice = notice.map(Notice::message);
    let page = component.page().page();

    let html = Owner::new().with(|| {
        view! {
            <ProductsPage
                rows=rows
                pagination=pagination
                modal=modal
                notice=notice
                page=page
            />
        }
        .to_html()
    });

    if html.starts_with("<!DOCTYPE") {
        html
    } else {
        format!("<!DOCTYPE html>{html}")
    }
}
