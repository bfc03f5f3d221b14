//! Products component
//!
//! The view-model behind the products screen: the paginated listing, the
//! add/edit modal and the delete confirmation. It is rebuilt for every
//! interaction, runs one action and is then rendered.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    pagination::{Page, PageRequest},
    products::{
        ProductsService, ProductsServiceError,
        records::{ProductId, ProductRecord},
    },
    users::records::UserUuid,
};

mod form;
mod notice;

pub use form::{EditTarget, FieldErrors, ProductForm, ValidProduct};
pub use notice::Notice;

/// Which dialog, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Editor,
    ConfirmDelete(ProductId),
}

#[derive(Debug, Error)]
pub enum ComponentError {
    /// The form failed validation; nothing was written.
    #[error("product form is invalid")]
    Validation(FieldErrors),

    #[error(transparent)]
    Products(#[from] ProductsServiceError),
}

pub struct ProductsComponent {
    products: Arc<dyn ProductsService>,
    user: UserUuid,
    page: PageRequest,
    form: ProductForm,
    modal: Modal,
    errors: FieldErrors,
}

impl Debug for ProductsComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProductsComponent")
            .field("user", &self.user)
            .field("page", &self.page)
            .field("form", &self.form)
            .field("modal", &self.modal)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl ProductsComponent {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, user: UserUuid) -> Self {
        Self {
            products,
            user,
            page: PageRequest::default(),
            form: ProductForm::draft(),
            modal: Modal::Closed,
            errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn page(&self) -> PageRequest {
        self.page
    }

    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    #[must_use]
    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The current page of the user's products.
    pub async fn list_products(&self) -> Result<Page<ProductRecord>, ComponentError> {
        Ok(self.products.list_products(self.user, self.page).await?)
    }

    /// Clear the edit target and open the add/edit modal.
    pub fn open_add_form(&mut self) {
        self.restore_form(ProductForm::draft());
    }

    /// Load `product` into the edit target and open the add/edit modal.
    pub fn open_edit_form(&mut self, product: &ProductRecord) {
        self.restore_form(ProductForm::from_record(product));
    }

    /// Load one of the user's products by id and open it for editing.
    ///
    /// # Errors
    ///
    /// [`ProductsServiceError::NotFound`] when the id is unknown or owned by
    /// someone else.
    pub async fn edit_product(&mut self, product: ProductId) -> Result<(), ComponentError> {
        let product = self.products.get_product(self.user, product).await?;

        self.open_edit_form(&product);

        Ok(())
    }

    /// Reopen the add/edit modal with a form carried over from the client.
    pub fn restore_form(&mut self, form: ProductForm) {
        self.form = form;
        self.errors.clear();
        self.modal = Modal::Editor;
    }

    /// Validate the edit target and persist it.
    ///
    /// On validation failure the errors are kept for rendering, the modal
    /// stays open and the store is not touched.
    pub async fn save(&mut self) -> Result<Notice, ComponentError> {
        let product = match self.form.check() {
            Ok(product) => product,
            Err(errors) => {
                debug!(fields = errors.iter().count(), "product form rejected");

                self.errors = errors.clone();
                self.modal = Modal::Editor;

                return Err(ComponentError::Validation(errors));
            }
        };

        let notice = match self.form.target() {
            EditTarget::Existing(id) => {
                self.products
                    .update_product(self.user, id, product.into_update())
                    .await?;

                info!(user = %self.user, product = %id, "product saved");

                Notice::ProductSaved
            }
            EditTarget::Draft => {
                let created = self
                    .products
                    .create_product(self.user, product.into_new_product())
                    .await?;

                info!(user = %self.user, product = %created.id, "product added");

                Notice::ProductAdded
            }
        };

        self.form = ProductForm::draft();
        self.errors.clear();
        self.modal = Modal::Closed;

        Ok(notice)
    }

    /// Ask for confirmation before deleting `product`.
    pub fn open_delete_confirm(&mut self, product: ProductId) {
        self.modal = Modal::ConfirmDelete(product);
    }

    /// Delete one of the user's products and close the confirmation.
    pub async fn delete_product(&mut self, product: ProductId) -> Result<Notice, ComponentError> {
        self.products.delete_product(self.user, product).await?;

        info!(user = %self.user, product = %product, "product deleted");

        self.modal = Modal::Closed;

        Ok(Notice::ProductDeleted)
    }

    /// Close whichever modal is open without side effects.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::products::{
        MockProductsService,
        data::{NewProduct, ProductUpdate},
    };

    use super::*;

    const USER: UserUuid = UserUuid::from_uuid(uuid::Uuid::nil());

    fn make_product(id: i64, name: &str, price: i64, active: bool) -> ProductRecord {
        ProductRecord {
            id: ProductId::from_raw(id),
            user: USER,
            name: name.to_string(),
            price: Decimal::new(price * 100, 2),
            active,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn component(products: MockProductsService) -> ProductsComponent {
        ProductsComponent::new(Arc::new(products), USER)
    }

    fn strict_mock() -> MockProductsService {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        products
    }

    #[test]
    fn starts_closed_with_draft() {
        let component = component(strict_mock());

        assert_eq!(component.modal(), Modal::Closed);
        assert_eq!(component.form().target(), EditTarget::Draft);
        assert_eq!(component.page(), PageRequest::new(1));
    }

    #[test]
    fn open_add_form_clears_edit_target() {
        let mut component = component(strict_mock());

        component.open_edit_form(&make_product(7, "Widget", 25, true));
        component.open_add_form();

        assert_eq!(component.modal(), Modal::Editor);
        assert_eq!(component.form(), &ProductForm::draft());
    }

    #[test]
    fn open_edit_form_loads_product() {
        let mut component = component(strict_mock());

        component.open_edit_form(&make_product(7, "Widget", 25, true));

        let form = component.form();

        assert_eq!(component.modal(), Modal::Editor);
        assert_eq!(form.target(), EditTarget::Existing(ProductId::from_raw(7)));
        assert_eq!(form.name(), "Widget");
        assert_eq!(form.price(), "25.00");
        assert_eq!(form.active(), Some(true));
    }

    #[tokio::test]
    async fn open_edit_form_clears_previous_errors() {
        let mut component = component(strict_mock());

        component.open_add_form();
        component.form_mut().set_name("Wid");

        let result = component.save().await;

        assert!(
            matches!(result, Err(ComponentError::Validation(_))),
            "expected Validation, got {result:?}"
        );
        assert!(!component.errors().is_empty());

        component.open_edit_form(&make_product(7, "Widget", 25, true));

        assert!(component.errors().is_empty(), "errors should be cleared");
    }

    #[tokio::test]
    async fn list_products_uses_user_and_page() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|user, page| *user == USER && *page == PageRequest::new(2))
            .return_once(|_, page| {
                Ok(Page::new(
                    vec![make_product(11, "Eleventh", 5, false)],
                    page,
                    11,
                ))
            });

        let component = component(products).with_page(PageRequest::new(2));

        let page = component.list_products().await?;

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.last_page(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn save_draft_creates_product_for_user() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|user, product| {
                *user == USER
                    && *product
                        == NewProduct {
                            name: "Widget".to_string(),
                            price: Decimal::new(25, 0),
                            active: Some(true),
                        }
            })
            .return_once(|_, _| Ok(make_product(1, "Widget", 25, true)));

        products.expect_update_product().never();

        let mut component = component(products);

        component.open_add_form();
        component.form_mut().set_name("Widget");
        component.form_mut().set_price("25");
        component.form_mut().set_active(true);

        let notice = component.save().await?;

        assert_eq!(notice, Notice::ProductAdded);
        assert_eq!(notice.message(), "Product Added Successfully");
        assert_eq!(component.modal(), Modal::Closed);
        assert_eq!(component.form(), &ProductForm::draft());

        Ok(())
    }

    #[tokio::test]
    async fn save_draft_without_active_leaves_flag_unset() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|_, product| product.active.is_none())
            .return_once(|_, _| Ok(make_product(1, "Gadget", 10, false)));

        let mut component = component(products);

        component.open_add_form();
        component.form_mut().set_name("Gadget");
        component.form_mut().set_price("10");

        component.save().await?;

        Ok(())
    }

    #[tokio::test]
    async fn save_existing_updates_product() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|user, id, update| {
                *user == USER
                    && *id == ProductId::from_raw(7)
                    && *update
                        == ProductUpdate {
                            name: "Widget Pro".to_string(),
                            price: Decimal::new(4999, 2),
                            active: false,
                        }
            })
            .return_once(|_, _, _| Ok(make_product(7, "Widget Pro", 50, false)));

        products.expect_create_product().never();

        let mut component = component(products);

        component.restore_form(ProductForm::existing(ProductId::from_raw(7)));
        component.form_mut().set_name("Widget Pro");
        component.form_mut().set_price("49.99");

        let notice = component.save().await?;

        assert_eq!(notice, Notice::ProductSaved);
        assert_eq!(component.modal(), Modal::Closed);

        Ok(())
    }

    #[tokio::test]
    async fn save_with_short_name_writes_nothing() {
        let mut component = component(strict_mock());

        component.open_edit_form(&make_product(7, "Widget", 25, true));
        component.form_mut().set_name("Wid");

        let result = component.save().await;

        assert!(
            matches!(&result, Err(ComponentError::Validation(errors)) if errors.contains("name")),
            "expected a name validation error, got {result:?}"
        );
        assert_eq!(component.modal(), Modal::Editor, "modal should stay open");
        assert_eq!(
            component.errors().get("name"),
            Some("The name must be at least 4 characters.")
        );
        assert_eq!(component.form().name(), "Wid", "input should be kept");
    }

    #[tokio::test]
    async fn save_with_price_out_of_range_writes_nothing() {
        for price in ["0", "101"] {
            let mut component = component(strict_mock());

            component.open_add_form();
            component.form_mut().set_name("Widget");
            component.form_mut().set_price(price);

            let result = component.save().await;

            assert!(
                matches!(
                    &result,
                    Err(ComponentError::Validation(errors)) if errors.contains("price")
                ),
                "price {price} should be rejected, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn save_accepts_price_bounds() -> TestResult {
        for price in ["1", "100"] {
            let mut products = MockProductsService::new();

            products
                .expect_create_product()
                .once()
                .return_once(|_, _| Ok(make_product(1, "Widget", 1, false)));

            let mut component = component(products);

            component.open_add_form();
            component.form_mut().set_name("Widget");
            component.form_mut().set_price(price);

            component.save().await?;
        }

        Ok(())
    }

    #[tokio::test]
    async fn save_propagates_not_found() {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::NotFound));

        let mut component = component(products);

        component.restore_form(ProductForm::existing(ProductId::from_raw(99)));
        component.form_mut().set_name("Widget");
        component.form_mut().set_price("10");

        let result = component.save().await;

        assert!(
            matches!(result, Err(ComponentError::Products(ProductsServiceError::NotFound))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn edit_product_loads_owned_product() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|user, id| *user == USER && *id == ProductId::from_raw(7))
            .return_once(|_, _| Ok(make_product(7, "Widget", 25, false)));

        let mut component = component(products);

        component.edit_product(ProductId::from_raw(7)).await?;

        assert_eq!(component.modal(), Modal::Editor);
        assert_eq!(component.form().name(), "Widget");
        assert_eq!(component.form().active(), Some(false));

        Ok(())
    }

    #[tokio::test]
    async fn edit_product_unknown_id_keeps_modal_closed() {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut component = component(products);

        let result = component.edit_product(ProductId::from_raw(404)).await;

        assert!(
            matches!(result, Err(ComponentError::Products(ProductsServiceError::NotFound))),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(component.modal(), Modal::Closed);
    }

    #[test]
    fn open_delete_confirm_stores_pending_id() {
        let mut component = component(strict_mock());

        component.open_delete_confirm(ProductId::from_raw(3));

        assert_eq!(
            component.modal(),
            Modal::ConfirmDelete(ProductId::from_raw(3))
        );

        component.close_modal();

        assert_eq!(component.modal(), Modal::Closed);
    }

    #[tokio::test]
    async fn delete_product_closes_confirmation() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|user, id| *user == USER && *id == ProductId::from_raw(3))
            .return_once(|_, _| Ok(()));

        let mut component = component(products);

        component.open_delete_confirm(ProductId::from_raw(3));

        let notice = component.delete_product(ProductId::from_raw(3)).await?;

        assert_eq!(notice, Notice::ProductDeleted);
        assert_eq!(component.modal(), Modal::Closed);

        Ok(())
    }
}
