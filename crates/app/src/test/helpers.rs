//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::products::data::NewProduct;

/// New inactive product with a whole-number price.
pub(crate) fn new_product(name: &str, price: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: Decimal::new(price, 0),
        active: None,
    }
}
