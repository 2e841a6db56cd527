use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::folga::{Folga, FolgaFiltros, NovaFolga};
use crate::utils::errors::{is_unique_violation, AppError, AppResult};

pub const FOLGA_DUPLICADA: &str = "Motorista já possui folga nesta data";

const FOLGA_UNIQUE: &str = "folgas_motorista_data_key";

/// Persistência de folgas.
///
/// Uma segunda folga para o mesmo (motorista, data) resulta em
/// `AppError::Conflict`, inclusive sob gravações concorrentes.
#[async_trait]
pub trait FolgaRepository: Send + Sync {
    async fn listar(&self, filtros: &FolgaFiltros) -> AppResult<Vec<Folga>>;

    async fn buscar(&self, id: Uuid) -> AppResult<Option<Folga>>;

    async fn criar(&self, folga: NovaFolga) -> AppResult<Folga>;

    async fn atualizar(&self, id: Uuid, folga: NovaFolga) -> AppResult<Option<Folga>>;

    async fn excluir(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgFolgaRepository {
    pool: PgPool,
}

impl PgFolgaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn mapear_conflito(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e, FOLGA_UNIQUE) {
        AppError::Conflict(FOLGA_DUPLICADA.to_string())
    } else {
        AppError::from(e)
    }
}

#[async_trait]
impl FolgaRepository for PgFolgaRepository {
    async fn listar(&self, filtros: &FolgaFiltros) -> AppResult<Vec<Folga>> {
        let folgas = sqlx::query_as::<_, Folga>(
            r#"
            SELECT f.id, f.motorista_id, f.data_folga, f.motivo, f.created_at
            FROM folgas f
            JOIN motoristas m ON m.id = f.motorista_id
            WHERE ($1::uuid IS NULL OR f.motorista_id = $1)
              AND ($2::uuid IS NULL OR m.garagem_id = $2)
              AND ($3::date IS NULL OR f.data_folga >= $3)
              AND ($4::date IS NULL OR f.data_folga <= $4)
            ORDER BY f.data_folga, m.nome
            "#,
        )
        .bind(filtros.motorista_id)
        .bind(filtros.garagem_id)
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(folgas)
    }

    async fn buscar(&self, id: Uuid) -> AppResult<Option<Folga>> {
        let folga = sqlx::query_as::<_, Folga>(
            "SELECT id, motorista_id, data_folga, motivo, created_at FROM folgas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(folga)
    }

    async fn criar(&self, folga: NovaFolga) -> AppResult<Folga> {
        sqlx::query_as::<_, Folga>(
            r#"
            INSERT INTO folgas (id, motorista_id, data_folga, motivo)
            VALUES ($1, $2, $3, $4)
            RETURNING id, motorista_id, data_folga, motivo, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(folga.motorista_id)
        .bind(folga.data_folga)
        .bind(folga.motivo)
        .fetch_one(&self.pool)
        .await
        .map_err(mapear_conflito)
    }

    async fn atualizar(&self, id: Uuid, folga: NovaFolga) -> AppResult<Option<Folga>> {
        sqlx::query_as::<_, Folga>(
            r#"
            UPDATE folgas
            SET motorista_id = $2, data_folga = $3, motivo = $4
            WHERE id = $1
            RETURNING id, motorista_id, data_folga, motivo, created_at
            "#,
        )
        .bind(id)
        .bind(folga.motorista_id)
        .bind(folga.data_folga)
        .bind(folga.motivo)
        .fetch_optional(&self.pool)
        .await
        .map_err(mapear_conflito)
    }

    async fn excluir(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folgas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
