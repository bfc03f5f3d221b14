//! Delete Confirmation Handler

use salvo::prelude::*;

use super::{component, product_id, render};

/// The listing with the delete confirmation open.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let mut component = component(req, depot)?;

    component.open_delete_confirm(product_id(req)?);

    render(&component, None).await
}
