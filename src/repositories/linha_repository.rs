use crate::models::linha::{CreateLinhaRequest, Linha, LinhaFiltros, UpdateLinhaRequest};
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LinhaRepository {
    pool: PgPool,
}

impl LinhaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateLinhaRequest) -> AppResult<Linha> {
        let linha = sqlx::query_as::<_, Linha>(
            r#"
            INSERT INTO linhas (id, cliente_id, codigo, nome)
            VALUES ($1, $2, $3, $4)
            RETURNING id, cliente_id, codigo, nome, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.cliente_id)
        .bind(&request.codigo)
        .bind(request.nome.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(linha)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Linha>> {
        let linha = sqlx::query_as::<_, Linha>(
            "SELECT id, cliente_id, codigo, nome, created_at FROM linhas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(linha)
    }

    pub async fn list(&self, filtros: &LinhaFiltros) -> AppResult<Vec<Linha>> {
        let linhas = sqlx::query_as::<_, Linha>(
            r#"
            SELECT id, cliente_id, codigo, nome, created_at FROM linhas
            WHERE ($1::uuid IS NULL OR cliente_id = $1)
            ORDER BY nome
            "#,
        )
        .bind(filtros.cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(linhas)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateLinhaRequest) -> AppResult<Option<Linha>> {
        let linha = sqlx::query_as::<_, Linha>(
            r#"
            UPDATE linhas
            SET cliente_id = COALESCE($2, cliente_id),
                codigo = COALESCE($3, codigo),
                nome = COALESCE($4, nome)
            WHERE id = $1
            RETURNING id, cliente_id, codigo, nome, created_at
            "#,
        )
        .bind(id)
        .bind(request.cliente_id)
        .bind(&request.codigo)
        .bind(request.nome.as_deref().map(str::trim))
        .fetch_optional(&self.pool)
        .await?;

        Ok(linha)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM linhas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
