//! Controller de autenticación del panel admin

use axum::http::HeaderMap;

use crate::dto::auth_dto::{AdminLoginRequest, AdminLoginResponse};
use crate::services::auth_service;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub async fn login(state: &AppState, request: AdminLoginRequest) -> AppResult<AdminLoginResponse> {
    // barrido oportunista de sesiones caducadas
    state.cleanup_expired_sessions().await;

    let session = auth_service::login_admin(state, &request.password).await?;

    Ok(AdminLoginResponse {
        token: session.token,
        expires_at: session.expires_at.to_rfc3339(),
    })
}

pub async fn logout(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    let token = bearer_token(headers)?;
    auth_service::logout_admin(state, token).await
}

/// Extraer el token del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Formato de Authorization inválido".to_string()))
}
