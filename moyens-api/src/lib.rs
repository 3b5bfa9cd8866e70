//! Read-only HTTP API over the logistics catalog: categories, accessories
//! and rolling equipment ("moyens roulants"), with the compatibility and
//! default-assignment links between them.

pub mod app;
pub mod catalog;
pub mod config;
pub mod database;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;

pub use app::{apply_middleware, build_app};
pub use catalog::{CatalogStore, SeaOrmCatalog};
pub use config::AppConfig;
pub use errors::{ApiError, StartupError};
pub use routes::router;
