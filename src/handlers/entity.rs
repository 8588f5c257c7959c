//! Entity handlers: pure dispatch into `CrudService`, generic over the kind.

use crate::error::AppError;
use crate::grid::{ExpandedGridSearch, GridResponse, GridSearch, StandardParams};
use crate::model::GridEntity;
use crate::response::ServiceResponse;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

pub async fn get_all<E: GridEntity>(
    State(state): State<AppState>,
) -> Result<Json<ServiceResponse<Vec<E::Dto>>>, AppError> {
    let list = CrudService::get_all::<E>(&state.pool).await?;
    Ok(Json(ServiceResponse::ok(list)))
}

pub async fn get_one<E: GridEntity>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceResponse<E::Dto>>, AppError> {
    let row = CrudService::get_by_id::<E>(&state.pool, id).await?;
    Ok(Json(ServiceResponse::ok(row)))
}

pub async fn create<E: GridEntity>(
    State(state): State<AppState>,
    Json(input): Json<E::Create>,
) -> Result<Json<ServiceResponse<Vec<E::Dto>>>, AppError> {
    let list = CrudService::create::<E>(&state.pool, input).await?;
    Ok(Json(ServiceResponse::ok(list)))
}

pub async fn update<E: GridEntity>(
    State(state): State<AppState>,
    Json(input): Json<E::Update>,
) -> Result<Json<ServiceResponse<E::Dto>>, AppError> {
    let row = CrudService::update::<E>(&state.pool, input).await?;
    Ok(Json(ServiceResponse::ok(row)))
}

pub async fn delete_one<E: GridEntity>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceResponse<Vec<E::Dto>>>, AppError> {
    let list = CrudService::delete::<E>(&state.pool, id).await?;
    Ok(Json(ServiceResponse::ok(list)))
}

/// Standard search returns the grid page without the envelope.
pub async fn get_all_standard<E: GridEntity>(
    State(state): State<AppState>,
    Query(params): Query<StandardParams>,
) -> Result<Json<GridResponse<E::Dto>>, AppError> {
    let page = CrudService::search_standard::<E>(&state.pool, params).await?;
    Ok(Json(page))
}

/// Generic search returns the grid page without the envelope.
pub async fn get_all_generic<E: GridEntity>(
    State(state): State<AppState>,
    Json(search): Json<GridSearch>,
) -> Result<Json<GridResponse<E::Dto>>, AppError> {
    let page = CrudService::search_generic::<E>(&state.pool, search).await?;
    Ok(Json(page))
}

pub async fn get_all_expanded<E: GridEntity>(
    State(state): State<AppState>,
    Json(search): Json<ExpandedGridSearch>,
) -> Result<Json<ServiceResponse<GridResponse<E::Projected>>>, AppError> {
    let page = CrudService::search_expanded::<E>(&state.pool, search).await?;
    Ok(Json(ServiceResponse::ok(page)))
}
