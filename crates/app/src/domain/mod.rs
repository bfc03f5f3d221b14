//! Catalog Domain Concerns

pub mod pagination;
pub mod products;
pub mod users;
