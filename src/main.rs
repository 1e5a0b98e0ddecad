use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use econest_trips::config::environment::EnvironmentConfig;
use econest_trips::create_app;
use econest_trips::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🌱 EcoNest - Trip Carbon Tracker API");
    info!("=====================================");

    let config = EnvironmentConfig::from_env().context("Error leyendo la configuración")?;

    // El catálogo se valida al arrancar: un catálogo inconsistente es fatal
    let app_state = match AppState::with_reference_catalog(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Catálogo de vehículos inválido: {}", e);
            return Err(anyhow::anyhow!("Catálogo de vehículos inválido: {}", e));
        }
    };
    info!(
        "🚗 Catálogo cargado: {} modelos en {} categorías",
        app_state.catalog().model_count(),
        app_state.catalog().categories().count()
    );

    let app = create_app(app_state);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehicle/categories - Categorías y modelo por defecto");
    info!("   GET  /api/vehicle/:category/models - Modelos de una categoría");
    info!("🧭 Viajes:");
    info!("   POST /api/trip/calculate - Calcular emisiones de un trayecto");
    info!("   POST /api/trip - Registrar viaje");
    info!("   GET  /api/trip - Historial (más reciente primero)");
    info!("   GET  /api/trip/summary - Totales del historial");
    info!("   DELETE /api/trip - Vaciar historial");
    info!("   GET  /api/destination - Destinos conocidos");
    info!("⚡ Presupuesto de carbono:");
    info!("   POST /api/carbon-budget - Calcular presupuesto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
