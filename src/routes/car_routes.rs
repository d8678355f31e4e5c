//! Rutas CRUD del inventario (panel admin)
//!
//! Todo el router pasa por el middleware de sesión admin.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::car_controller::CarController;
use crate::database::schema;
use crate::dto::car_dto::{
    ApiResponse, CarResponse, CreateCarRequest, InventoryQueryParams, UpdateCarRequest,
};
use crate::middleware::admin_auth::admin_auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_car_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/cars", post(create_car))
        .route("/cars", get(list_cars))
        .route("/cars/:id", get(get_car))
        .route("/cars/:id", put(update_car))
        .route("/cars/:id", delete(delete_car))
        .route("/cars/:id/sold", patch(toggle_sold))
        .route("/init-table", post(init_table))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<InventoryQueryParams>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list(params.search).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn toggle_sold(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.toggle_sold(id).await?;
    Ok(Json(response))
}

async fn init_table(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    schema::ensure_cars_table(&state.pool).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Tabla cars creada/verificada exitosamente"
    })))
}
