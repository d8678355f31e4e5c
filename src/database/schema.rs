//! Schema de la tabla cars
//!
//! La creación es idempotente: se ejecuta al arrancar y también está
//! expuesta como endpoint admin de inicialización.

use sqlx::PgPool;

use crate::utils::errors::AppResult;

/// Crear la tabla cars si no existe.
/// Todas las columnas son NOT NULL con default: la API escribe siempre
/// el registro completo y `features` nunca es null (ausencia = lista vacía).
pub async fn ensure_cars_table(pool: &PgPool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            make VARCHAR(100) NOT NULL,
            model VARCHAR(100) NOT NULL,
            year INTEGER NOT NULL,
            price DECIMAL(12, 2) NOT NULL,
            mileage INTEGER NOT NULL,
            image_url TEXT NOT NULL DEFAULT '',
            fuel_type VARCHAR(50) NOT NULL DEFAULT '',
            transmission VARCHAR(50) NOT NULL DEFAULT '',
            body_type VARCHAR(50) NOT NULL DEFAULT '',
            color VARCHAR(50) NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            features JSONB NOT NULL DEFAULT '[]',
            sold BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("✅ Tabla cars creada/verificada");
    Ok(())
}
