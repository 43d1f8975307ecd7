use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rental_backend::config::environment::EnvironmentConfig;
use rental_backend::create_router;
use rental_backend::database::connection::create_pool;
use rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Backend - Motor de precios y contratos");
    info!("================================================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app = create_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("📊 Tramos de duración:");
    info!("   POST   /api/tier - Crear tramo");
    info!("   GET    /api/tier - Listar tramos");
    info!("   PUT    /api/tier/:id - Actualizar tramo");
    info!("   DELETE /api/tier/:id - Eliminar tramo");
    info!("   POST   /api/tier/seed - Cargar tramos por defecto");
    info!("💰 Precios:");
    info!("   GET    /api/pricing/quote/:car_id - Matriz de cotización");
    info!("📝 Reservas y contratos:");
    info!("   POST   /api/booking - Crear reserva");
    info!("   GET    /api/contract - Listar contratos");
    info!("   GET    /api/contract/:id - Obtener contrato");
    info!("   GET    /api/contract/:id/payments - Pagos del contrato");
    info!("   POST   /api/contract/:id/activate - Activar contrato");
    info!("   POST   /api/contract/:id/close - Cerrar contrato");
    info!("   POST   /api/contract/:id/cancel - Cancelar contrato");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
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
