//! Edit Product Handler

use salvo::prelude::*;

use crate::products::errors::into_status_error;

use super::{component, product_id, render};

/// The listing with the edit form open for one of the user's products.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let mut component = component(req, depot)?;
    let id = product_id(req)?;

    component
        .edit_product(id)
        .await
        .map_err(into_status_error)?;

    render(&component, None).await
}
