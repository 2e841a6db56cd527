use crate::models::veiculo::{CreateVeiculoRequest, UpdateVeiculoRequest, Veiculo, VeiculoFiltros};
use crate::utils::errors::AppResult;
use crate::utils::validation::normalizar_placa;
use sqlx::PgPool;
use uuid::Uuid;

const VEICULO_COLUMNS: &str = "id, prefixo, placa, tipo, capacidade, garagem_id, ativo, created_at";

pub struct VeiculoRepository {
    pool: PgPool,
}

impl VeiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Placa repetida vira `AppError::Conflict` pela constraint UNIQUE
    pub async fn create(&self, request: &CreateVeiculoRequest) -> AppResult<Veiculo> {
        let veiculo = sqlx::query_as::<_, Veiculo>(&format!(
            r#"
            INSERT INTO veiculos (id, prefixo, placa, tipo, capacidade, garagem_id, ativo)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            VEICULO_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&request.prefixo)
        .bind(normalizar_placa(&request.placa))
        .bind(&request.tipo)
        .bind(request.capacidade)
        .bind(request.garagem_id)
        .bind(request.ativo.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Veiculo>> {
        let veiculo = sqlx::query_as::<_, Veiculo>(&format!(
            "SELECT {} FROM veiculos WHERE id = $1",
            VEICULO_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn list(&self, filtros: &VeiculoFiltros) -> AppResult<Vec<Veiculo>> {
        let veiculos = sqlx::query_as::<_, Veiculo>(&format!(
            r#"
            SELECT {} FROM veiculos
            WHERE ($1::uuid IS NULL OR garagem_id = $1)
              AND ($2::boolean IS NULL OR ativo = $2)
            ORDER BY placa
            "#,
            VEICULO_COLUMNS
        ))
        .bind(filtros.garagem_id)
        .bind(filtros.ativo)
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateVeiculoRequest) -> AppResult<Option<Veiculo>> {
        let veiculo = sqlx::query_as::<_, Veiculo>(&format!(
            r#"
            UPDATE veiculos
            SET prefixo = COALESCE($2, prefixo),
                placa = COALESCE($3, placa),
                tipo = COALESCE($4, tipo),
                capacidade = COALESCE($5, capacidade),
                garagem_id = COALESCE($6, garagem_id),
                ativo = COALESCE($7, ativo)
            WHERE id = $1
            RETURNING {}
            "#,
            VEICULO_COLUMNS
        ))
        .bind(id)
        .bind(&request.prefixo)
        .bind(request.placa.as_deref().map(normalizar_placa))
        .bind(&request.tipo)
        .bind(request.capacidade)
        .bind(request.garagem_id)
        .bind(request.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
