// Library entry point for VillageStay
// Exposes modules for integration tests; main.rs stays the binary entry point.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod schema;
pub mod services;

pub use error::ApiError;
pub use models::AppState;
