//! Rutas de autenticación del panel admin

use axum::{
    extract::State,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::controllers::auth_controller;
use crate::dto::auth_dto::{AdminLoginRequest, AdminLoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin_login))
        .route("/logout", post(admin_logout))
}

async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, AppError> {
    let response = auth_controller::login(&state, request).await?;
    Ok(Json(response))
}

async fn admin_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    auth_controller::logout(&state, &headers).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Sesión cerrada exitosamente"
    })))
}
