use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dealership_catalog::config::environment::EnvironmentConfig;
use dealership_catalog::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use dealership_catalog::state::AppState;
use dealership_catalog::{database, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Dealership Catalog - API de showroom y financiación");
    info!("======================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match database::connection::create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear/verificar el schema al arrancar (idempotente)
    if let Err(e) = database::schema::ensure_cars_table(&pool).await {
        error!("❌ Error inicializando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .nest("/api/finance", routes::finance_routes::create_finance_router())
        .nest(
            "/api/admin",
            routes::auth_routes::create_admin_auth_router()
                .merge(routes::car_routes::create_admin_car_router(app_state.clone())),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏁 Catálogo público:");
    info!("   GET  /api/catalog - Listado filtrable (search, make, price_min, price_max, body_type)");
    info!("   GET  /api/catalog/facets - Marcas y carrocerías disponibles");
    info!("   GET  /api/catalog/:id - Ficha de un vehículo");
    info!("💰 Financiación:");
    info!("   POST /api/finance/calculate - Cuota mensual e interés total");
    info!("🔐 Panel admin:");
    info!("   POST /api/admin/login - Login admin");
    info!("   POST /api/admin/logout - Logout admin");
    info!("   GET  /api/admin/cars - Inventario completo (vendidos incluidos)");
    info!("   POST /api/admin/cars - Crear vehículo");
    info!("   GET  /api/admin/cars/:id - Obtener vehículo");
    info!("   PUT  /api/admin/cars/:id - Actualizar vehículo");
    info!("   DELETE /api/admin/cars/:id - Eliminar vehículo");
    info!("   PATCH /api/admin/cars/:id/sold - Alternar flag de vendido");
    info!("   POST /api/admin/init-table - Crear/verificar tabla cars");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dealership-catalog",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
