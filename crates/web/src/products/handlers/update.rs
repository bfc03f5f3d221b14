//! Update Product Handler

use catalog_app::components::products::ProductForm;
use salvo::prelude::*;

use super::{component, product_id, read_form, save};

/// Save the submitted edit form over one of the user's products.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let component = component(req, depot)?;
    let id = product_id(req)?;
    let form = read_form(req, ProductForm::existing(id)).await;

    save(component, form, res).await
}

#[cfg(test)]
mod tests {
    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, data::ProductUpdate, records::ProductId,
    };
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, make_product, products_service};

    use super::{super::tests::expect_listing, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").post(handler))
    }

    #[tokio::test]
    async fn updates_product_and_shows_notice() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|user, id, update| {
                *user == TEST_USER_UUID
                    && *id == ProductId::from_raw(7)
                    && *update
                        == ProductUpdate {
                            name: "Widget Pro".to_string(),
                            price: Decimal::new(4999, 2),
                            active: false,
                        }
            })
            .return_once(|_, _, _| Ok(make_product(7, "Widget Pro", 4999, false)));

        expect_listing(&mut products, 2, vec![], 11);

        let mut res = TestClient::post("http://example.com/products/7?page=2")
            .form(&[("name", "Widget Pro"), ("price", "49.99")])
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.take_string().await?.contains("Product Saved Successfully"),
            "notice missing"
        );

        Ok(())
    }

    #[tokio::test]
    async fn short_name_leaves_product_untouched() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        expect_listing(&mut products, 1, vec![make_product(7, "Widget", 2500, true)], 1);

        let mut res = TestClient::post("http://example.com/products/7")
            .form(&[("name", "Wid"), ("price", "25"), ("active", "1")])
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body = res.take_string().await?;

        assert!(body.contains("Edit Product"), "edit modal stays open");
        assert!(
            body.contains("The name must be at least 4 characters."),
            "inline name error"
        );

        Ok(())
    }

    #[tokio::test]
    async fn foreign_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::NotFound));

        products.expect_list_products().never();

        let res = TestClient::post("http://example.com/products/99")
            .form(&[("name", "Widget"), ("price", "10")])
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
