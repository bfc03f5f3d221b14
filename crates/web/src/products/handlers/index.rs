//! Product Index Handler

use salvo::prelude::*;

use super::{component, render};

/// List the user's products, one page at a time.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    render(&component(req, depot)?, None).await
}
