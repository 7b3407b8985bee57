//! Middleware applied to every route.

mod cors;

pub use cors::cors_layer;
