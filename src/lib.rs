// T-Pay Link - payment deep link generation service

pub mod config;
pub mod link;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use types::{AppError, AppResult};

pub fn create_router(config: &Config) -> axum::Router {
    routes::create_router(config)
}
