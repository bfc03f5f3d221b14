//! Catalog application: product catalog domain, persistence and the products
//! screen view-model.

pub mod auth;
pub mod components;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
