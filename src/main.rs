use anyhow::Result;
use axum::{routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tracing::info;

use viagens_backend::config::environment::EnvironmentConfig;
use viagens_backend::middleware::cors::cors_middleware;
use viagens_backend::routes;
use viagens_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 VIAGENS - Sistema de registro y aprobación de viagens");
    info!("========================================================");

    let config = EnvironmentConfig::from_env();
    let app_state = AppState::new(config.clone());

    // Sembrar usuarios iniciales
    if let Err(e) = app_state.users.seed_defaults().await {
        tracing::error!("❌ Error sembrando usuarios iniciales: {}", e);
        return Err(anyhow::anyhow!("Error de inicialización: {}", e));
    }

    // Carga inicial desde la planilla remota (best-effort)
    let loaded = app_state.trips.hydrate().await;
    info!("📋 {} viagens cargadas desde la planilla remota", loaded);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest("/api/report", routes::report_routes::create_report_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/register - Registro de usuario");
    info!("🚛 Endpoints - Trip:");
    info!("   POST /api/trip - Iniciar viagem");
    info!("   GET  /api/trip - Listar viagens");
    info!("   GET  /api/trip/pending - Cola de revisión");
    info!("   GET  /api/trip/:id - Detalle de viagem");
    info!("   POST /api/trip/:id/factory-arrival - Chegada na fábrica");
    info!("   POST /api/trip/:id/factory-departure - Saída da fábrica");
    info!("   POST /api/trip/:id/finish - Finalizar viagem");
    info!("   POST /api/trip/:id/decision - Aprobar/Rechazar");
    info!("   PUT  /api/trip/:id/amend - Enmienda de auditoría");
    info!("📊 Endpoints - Report:");
    info!("   GET  /api/report - Reporte de viagens auditadas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "service": "viagens",
        "status": "healthy"
    }))
}
