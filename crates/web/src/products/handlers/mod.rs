//! Product Handlers
//!
//! Every handler rebuilds the products component for the authenticated user,
//! runs one action on it and renders the whole page.

use std::sync::Arc;

use catalog_app::{
    components::products::{ComponentError, Notice, ProductForm, ProductsComponent},
    domain::{pagination::PageRequest, products::records::ProductId},
};
use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, views},
    state::State,
};

pub(crate) mod confirm_delete;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod index;
pub(crate) mod store;
pub(crate) mod update;

fn component(req: &Request, depot: &Depot) -> Result<ProductsComponent, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let page = PageRequest::new(req.query::<u32>("page").unwrap_or(1));

    Ok(ProductsComponent::new(Arc::clone(&state.app.products), user).with_page(page))
}

fn product_id(req: &Request) -> Result<ProductId, StatusError> {
    req.param::<String>("id")
        .unwrap_or_default()
        .parse::<ProductId>()
        .or_400("Invalid product id")
}

/// Fill `form` from the submitted fields. An unchecked box is not submitted.
async fn read_form(req: &mut Request, mut form: ProductForm) -> ProductForm {
    form.set_name(req.form::<String>("name").await.unwrap_or_default());
    form.set_price(req.form::<String>("price").await.unwrap_or_default());

    if req.form::<String>("active").await.is_some() {
        form.set_active(true);
    }

    form
}

async fn render(
    component: &ProductsComponent,
    notice: Option<Notice>,
) -> Result<Text<String>, StatusError> {
    let products = component
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Text::Html(views::render_page(component, &products, notice)))
}

/// Save the submitted form; invalid input re-renders the open modal as `422`.
async fn save(
    mut component: ProductsComponent,
    form: ProductForm,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    component.restore_form(form);

    match component.save().await {
        Ok(notice) => render(&component, Some(notice)).await,
        Err(ComponentError::Validation(_)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);

            render(&component, None).await
        }
        Err(error) => Err(into_status_error(error)),
    }
}

#[cfg(test)]
mod tests {
    use catalog_app::domain::{
        pagination::{Page, PageRequest},
        products::{MockProductsService, records::ProductRecord},
    };

    use crate::test_helpers::TEST_USER_UUID;

    /// Expect exactly one listing of `page`, answering with `items`.
    pub(super) fn expect_listing(
        products: &mut MockProductsService,
        page: u32,
        items: Vec<ProductRecord>,
        total: u64,
    ) {
        products
            .expect_list_products()
            .once()
            .withf(move |user, request| *user == TEST_USER_UUID && request.page() == page)
            .return_once(move |_, request: PageRequest| Ok(Page::new(items, request, total)));
    }
}
