//! Route assembly: one entity router per kind plus the common routes.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::model::{Character, Product};
use crate::state::AppState;
use axum::Router;

/// All `/api/<Kind>/...` routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/Character", entity_routes::<Character>(state.clone()))
        .nest("/api/Product", entity_routes::<Product>(state))
}
