//! Product Errors

use catalog_app::{components::products::ComponentError, domain::products::ProductsServiceError};
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: ComponentError) -> StatusError {
    match error {
        ComponentError::Validation(_errors) => StatusError::unprocessable_entity(),
        ComponentError::Products(error) => match error {
            ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
            ProductsServiceError::InvalidReference
            | ProductsServiceError::MissingRequiredData
            | ProductsServiceError::InvalidData => {
                StatusError::bad_request().brief("Invalid product data")
            }
            ProductsServiceError::Sql(source) => {
                error!("product storage failed: {source}");

                StatusError::internal_server_error()
            }
            ProductsServiceError::InvalidCount(source) => {
                error!("product count out of range: {source}");

                StatusError::internal_server_error()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let status = into_status_error(ProductsServiceError::NotFound.into());

        assert_eq!(status.code, StatusCode::NOT_FOUND);
    }

    #[test]
    fn check_violation_maps_to_400() {
        let status = into_status_error(ProductsServiceError::InvalidData.into());

        assert_eq!(status.code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_count_maps_to_500() -> TestResult {
        let source = u64::try_from(-1_i64)
            .err()
            .ok_or("negative count should not convert")?;

        let status = into_status_error(ProductsServiceError::from(source).into());

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
