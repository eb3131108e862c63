use anyhow::Result;
use axum::{middleware, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rental_fleet::config::database::DatabaseConfig;
use rental_fleet::config::environment::EnvironmentConfig;
use rental_fleet::middleware::auth::auth_middleware;
use rental_fleet::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use rental_fleet::routes;
use rental_fleet::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Fleet - Consola administrativa de alquiler");
    info!("====================================================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let config = EnvironmentConfig::default();
    let app_state = AppState::new(pool, config.clone());

    // Rutas protegidas por JWT
    let protected = Router::new()
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/customers", routes::customer_routes::create_customer_router())
        .nest("/api/companies", routes::company_routes::create_company_router())
        .nest("/api/branches", routes::branch_routes::create_branch_router())
        .nest("/api/users", routes::user_routes::create_user_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware));

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(app_state.clone()))
        .merge(protected)
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("📅 Bookings:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings - Listar reservas");
    info!("   GET  /api/bookings/:id - Obtener reserva");
    info!("   PUT  /api/bookings/:id - Actualizar reserva");
    info!("   POST /api/bookings/:id/complete - Completar reserva");
    info!("   POST /api/bookings/:id/archive - Archivar reserva");
    info!("   POST /api/bookings/:id/restore - Restaurar reserva");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/available - Vehículos disponibles por rango");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   POST /api/vehicles/:id/archive - Archivar vehículo");
    info!("👤 Customers:");
    info!("   POST /api/customers - Guardar cliente (upsert por pasaporte)");
    info!("   GET  /api/customers - Listar clientes");
    info!("   GET  /api/customers/:id - Obtener cliente");
    info!("   POST /api/customers/:id/archive - Archivar cliente");
    info!("   POST /api/customers/:id/restore - Restaurar cliente");
    info!("🏢 Companies / Branches / Users: CRUD bajo /api/companies, /api/branches, /api/users");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Resumen de estadísticas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-fleet",
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
