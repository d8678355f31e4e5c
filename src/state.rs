//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;

/// Sesión activa del panel admin
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub token: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl AdminSession {
    pub fn new(token: String, expires_in_hours: i64) -> Self {
        let now = chrono::Utc::now();
        Self {
            token,
            issued_at: now,
            expires_at: now + chrono::Duration::hours(expires_in_hours),
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub admin_sessions: Arc<RwLock<HashMap<String, AdminSession>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            admin_sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Almacenar una sesión admin nueva
    pub async fn store_admin_session(&self, token: String, ttl_hours: i64) -> AdminSession {
        let session = AdminSession::new(token.clone(), ttl_hours);
        let mut sessions = self.admin_sessions.write().await;
        sessions.insert(token, session.clone());
        log::info!("💾 Sesión almacenada. Sesiones activas: {}", sessions.len());
        session
    }

    /// Verificar que el token corresponde a una sesión vigente
    pub async fn validate_admin_session(&self, token: &str) -> bool {
        let sessions = self.admin_sessions.read().await;
        match sessions.get(token) {
            Some(session) => !session.is_expired(),
            None => false,
        }
    }

    /// Revocar una sesión. Devuelve false si el token no existía.
    pub async fn revoke_admin_session(&self, token: &str) -> bool {
        let mut sessions = self.admin_sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Limpiar sesiones expiradas
    pub async fn cleanup_expired_sessions(&self) {
        let mut sessions = self.admin_sessions.write().await;
        sessions.retain(|_, session| !session.is_expired());
    }
}
