//! Server-side view-models.

pub mod products;
