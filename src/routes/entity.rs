//! Entity CRUD and grid-search routes, instantiated once per record kind.
//! Static segments (GetAll, GetAllStandard, ...) take precedence over `/:id`.

use crate::handlers::entity::{
    create, delete_one, get_all, get_all_expanded, get_all_generic, get_all_standard, get_one,
    update,
};
use crate::model::GridEntity;
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn entity_routes<E: GridEntity>(state: AppState) -> Router {
    Router::new()
        .route("/GetAll", get(get_all::<E>))
        .route("/GetAllStandard", get(get_all_standard::<E>))
        .route("/GetAllGeneric", post(get_all_generic::<E>))
        .route("/GetAllExpanded", post(get_all_expanded::<E>))
        .route("/", post(create::<E>).put(update::<E>))
        .route("/:id", get(get_one::<E>).delete(delete_one::<E>))
        .with_state(state)
}
