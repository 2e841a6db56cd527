use crate::models::motorista::{
    CreateMotoristaRequest, Motorista, MotoristaFiltros, UpdateMotoristaRequest,
};
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

const MOTORISTA_COLUMNS: &str = "id, nome, re, cpf, telefone, cnh, garagem_id, ativo, created_at";

/// Cadastro de motoristas. Alterações aqui não tocam os snapshots já
/// gravados nas viagens das escalas.
pub struct MotoristaRepository {
    pool: PgPool,
}

impl MotoristaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateMotoristaRequest) -> AppResult<Motorista> {
        let motorista = sqlx::query_as::<_, Motorista>(&format!(
            r#"
            INSERT INTO motoristas (id, nome, re, cpf, telefone, cnh, garagem_id, ativo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            MOTORISTA_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(request.nome.trim())
        .bind(request.re.trim())
        .bind(&request.cpf)
        .bind(&request.telefone)
        .bind(&request.cnh)
        .bind(request.garagem_id)
        .bind(request.ativo.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Motorista>> {
        let motorista = sqlx::query_as::<_, Motorista>(&format!(
            "SELECT {} FROM motoristas WHERE id = $1",
            MOTORISTA_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn list(&self, filtros: &MotoristaFiltros) -> AppResult<Vec<Motorista>> {
        let motoristas = sqlx::query_as::<_, Motorista>(&format!(
            r#"
            SELECT {} FROM motoristas
            WHERE ($1::uuid IS NULL OR garagem_id = $1)
              AND ($2::boolean IS NULL OR ativo = $2)
            ORDER BY nome
            "#,
            MOTORISTA_COLUMNS
        ))
        .bind(filtros.garagem_id)
        .bind(filtros.ativo)
        .fetch_all(&self.pool)
        .await?;

        Ok(motoristas)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateMotoristaRequest,
    ) -> AppResult<Option<Motorista>> {
        let motorista = sqlx::query_as::<_, Motorista>(&format!(
            r#"
            UPDATE motoristas
            SET nome = COALESCE($2, nome),
                re = COALESCE($3, re),
                cpf = COALESCE($4, cpf),
                telefone = COALESCE($5, telefone),
                cnh = COALESCE($6, cnh),
                garagem_id = COALESCE($7, garagem_id),
                ativo = COALESCE($8, ativo)
            WHERE id = $1
            RETURNING {}
            "#,
            MOTORISTA_COLUMNS
        ))
        .bind(id)
        .bind(request.nome.as_deref().map(str::trim))
        .bind(request.re.as_deref().map(str::trim))
        .bind(&request.cpf)
        .bind(&request.telefone)
        .bind(&request.cnh)
        .bind(request.garagem_id)
        .bind(request.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM motoristas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
