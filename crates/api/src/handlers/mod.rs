//! Request handlers.

pub mod health_handler;
pub mod info_handler;
pub mod model_handler;

pub use health_handler::health_routes;
