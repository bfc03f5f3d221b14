//! Add Product Handler

use salvo::prelude::*;

use super::{component, render};

/// The listing with an empty add form open.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let mut component = component(req, depot)?;

    component.open_add_form();

    render(&component, None).await
}
