//! Store Product Handler

use catalog_app::components::products::ProductForm;
use salvo::prelude::*;

use super::{component, read_form, save};

/// Create a product from the submitted add form.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let component = component(req, depot)?;
    let form = read_form(req, ProductForm::draft()).await;

    save(component, form, res).await
}
