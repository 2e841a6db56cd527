use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use escala_frota::config::{DatabaseConfig, EnvironmentConfig};
use escala_frota::database::DatabaseConnection;
use escala_frota::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚌 Escala de Frota - API");
    info!("========================");
    info!("🌎 Ambiente: {}", config.environment);

    let db_config = DatabaseConfig::from_env()?;

    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro ao conectar ao banco de dados: {}", e);
            return Err(e);
        }
    };

    if db_config.run_migrations {
        db_connection.run_migrations().await?;
    } else {
        warn!("⏭️ RUN_MIGRATIONS=false, migrações não aplicadas");
    }

    let pool = db_connection.pool().clone();
    let addr = config.server_url();
    let app = create_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Servidor ouvindo em http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento gracioso
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Falha ao instalar handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sinal) => {
                sinal.recv().await;
            }
            Err(e) => {
                error!("❌ Falha ao instalar handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
