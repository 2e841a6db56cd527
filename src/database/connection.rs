//! Conexão com PostgreSQL
//!
//! Cria o pool a partir de `DatabaseConfig` e aplica as migrações em
//! `migrations/` na inicialização.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Conexão com o banco, dona do pool
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando a configuração informada
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️ Conectando ao banco: {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .context("Erro ao criar o pool de conexões")?;

        info!(
            "✅ Pool criado (min: {}, max: {})",
            config.min_connections, config.max_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Executar as migrações pendentes
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Erro ao executar migrações")?;
        info!("✅ Migrações aplicadas");
        Ok(())
    }
}

/// Mascarar credenciais da URL do banco nos logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let protocol_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if protocol_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..protocol_end], &url[at_pos + 1..])
}
