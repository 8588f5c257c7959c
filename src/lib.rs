//! Armory: game-data REST backend library.

pub mod dto;
pub mod error;
pub mod grid;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use grid::{ExpandedGridSearch, GridResponse, GridSearch, SelectedColumns, StandardParams};
pub use migration::apply_migrations;
pub use model::{Character, GridEntity, Product, RpgClass};
pub use response::ServiceResponse;
pub use routes::{api_routes, common_routes, entity_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::ensure_database_exists;
