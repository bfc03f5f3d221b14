//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::users::records::UserUuid, ids::TypedId};

/// Store-generated product id
pub type ProductId = TypedId<ProductRecord, i64>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub user: UserUuid,
    pub name: String,
    pub price: Decimal,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
