//! DTOs de autenticación del panel admin

use serde::{Deserialize, Serialize};

/// Request de login del panel admin
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// Response de login con el token de sesión emitido
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: String,
}
