//! Rutas públicas del catálogo

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::car_dto::CarResponse;
use crate::dto::catalog_dto::{CatalogQueryParams, FacetsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(browse_catalog))
        .route("/facets", get(get_facets))
        .route("/:id", get(get_car_detail))
}

async fn browse_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    let response = controller.browse(params.into_filter_query()).await?;
    Ok(Json(response))
}

async fn get_facets(
    State(state): State<AppState>,
) -> Result<Json<FacetsResponse>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    let response = controller.facets().await?;
    Ok(Json(response))
}

async fn get_car_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    let response = controller.detail(id).await?;
    Ok(Json(response))
}
