//! Student-records REST service: a custom student controller under /api
//! plus a generic per-entity CRUD surface under /rest, backed by SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repo;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use routes::{api_routes, app_router, common_routes, rest_routes};
pub use seed::seed_if_empty;
pub use state::AppState;
pub use store::{connect, ensure_schema, open_in_memory};
