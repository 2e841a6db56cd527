use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::dashboard::{DashboardFiltros, RegistroMovimento};
use crate::utils::errors::AppResult;

/// Fontes do dashboard. Cada método devolve uma linha por ocorrência
/// contável dentro do período (e da garagem, se filtrada).
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn viagens_fixas(&self, filtros: &DashboardFiltros) -> AppResult<Vec<RegistroMovimento>>;

    async fn viagens_extras(&self, filtros: &DashboardFiltros)
        -> AppResult<Vec<RegistroMovimento>>;

    async fn itinerarios_atualizados(
        &self,
        filtros: &DashboardFiltros,
    ) -> AppResult<Vec<RegistroMovimento>>;
}

pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PgDashboardRepository {
    async fn viagens_fixas(&self, filtros: &DashboardFiltros) -> AppResult<Vec<RegistroMovimento>> {
        // A garagem da viagem prevalece; sem ela vale a da escala
        let registros = sqlx::query_as::<_, RegistroMovimento>(
            r#"
            SELECT e.data_escala AS data,
                   COALESCE(v.garagem_id, e.garagem_id) AS garagem_id,
                   v.cliente_id
            FROM escala_viagens v
            JOIN escalas e ON e.id = v.escala_id
            WHERE e.data_escala BETWEEN $1 AND $2
              AND ($3::uuid IS NULL OR COALESCE(v.garagem_id, e.garagem_id) = $3)
            "#,
        )
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .bind(filtros.garagem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    async fn viagens_extras(
        &self,
        filtros: &DashboardFiltros,
    ) -> AppResult<Vec<RegistroMovimento>> {
        let registros = sqlx::query_as::<_, RegistroMovimento>(
            r#"
            SELECT data_viagem AS data, garagem_id, cliente_id
            FROM viagens_extras
            WHERE data_viagem BETWEEN $1 AND $2
              AND ($3::uuid IS NULL OR garagem_id = $3)
            "#,
        )
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .bind(filtros.garagem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    async fn itinerarios_atualizados(
        &self,
        filtros: &DashboardFiltros,
    ) -> AppResult<Vec<RegistroMovimento>> {
        let registros = sqlx::query_as::<_, RegistroMovimento>(
            r#"
            SELECT atualizado_em AS data, garagem_id, cliente_id
            FROM itinerarios
            WHERE atualizado_em BETWEEN $1 AND $2
              AND ($3::uuid IS NULL OR garagem_id = $3)
            "#,
        )
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .bind(filtros.garagem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }
}
