//! Servicio de autenticación del panel admin
//!
//! El secreto admin se verifica contra un hash bcrypt configurado por
//! entorno (nunca se compara texto plano) y cada login emite un token
//! de sesión opaco con expiración, guardado en el estado compartido.

use bcrypt::verify;
use uuid::Uuid;

use crate::state::{AdminSession, AppState};
use crate::utils::errors::{AppError, AppResult};

/// Autentica al admin y emite un token de sesión nuevo
pub async fn login_admin(state: &AppState, password: &str) -> AppResult<AdminSession> {
    let matches = verify(password, &state.config.admin_password_hash)
        .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;

    if !matches {
        log::warn!("❌ Intento de acceso admin con contraseña incorrecta");
        return Err(AppError::Unauthorized("Contraseña incorrecta".to_string()));
    }

    let token = Uuid::new_v4().to_string();
    let session = state
        .store_admin_session(token, state.config.admin_session_ttl_hours)
        .await;

    log::info!("✅ Sesión admin emitida, expira {}", session.expires_at);
    Ok(session)
}

/// Revoca el token de sesión presentado. Devuelve error si el token
/// no corresponde a ninguna sesión activa.
pub async fn logout_admin(state: &AppState, token: &str) -> AppResult<()> {
    if state.revoke_admin_session(token).await {
        log::info!("👋 Sesión admin revocada");
        Ok(())
    } else {
        Err(AppError::Unauthorized("Sesión no encontrada o ya expirada".to_string()))
    }
}
