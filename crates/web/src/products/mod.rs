//! Products screen

mod errors;
mod handlers;
mod views;

pub(crate) use handlers::*;
