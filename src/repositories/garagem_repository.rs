use crate::models::garagem::{CreateGaragemRequest, Garagem, UpdateGaragemRequest};
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

pub struct GaragemRepository {
    pool: PgPool,
}

impl GaragemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateGaragemRequest) -> AppResult<Garagem> {
        let garagem = sqlx::query_as::<_, Garagem>(
            r#"
            INSERT INTO garagens (id, nome, endereco)
            VALUES ($1, $2, $3)
            RETURNING id, nome, endereco, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.nome.trim())
        .bind(&request.endereco)
        .fetch_one(&self.pool)
        .await?;

        Ok(garagem)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Garagem>> {
        let garagem = sqlx::query_as::<_, Garagem>(
            "SELECT id, nome, endereco, created_at FROM garagens WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(garagem)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Garagem>> {
        let garagens = sqlx::query_as::<_, Garagem>(
            "SELECT id, nome, endereco, created_at FROM garagens ORDER BY nome",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(garagens)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateGaragemRequest) -> AppResult<Option<Garagem>> {
        let garagem = sqlx::query_as::<_, Garagem>(
            r#"
            UPDATE garagens
            SET nome = COALESCE($2, nome), endereco = COALESCE($3, endereco)
            WHERE id = $1
            RETURNING id, nome, endereco, created_at
            "#,
        )
        .bind(id)
        .bind(request.nome.as_deref().map(str::trim))
        .bind(&request.endereco)
        .fetch_optional(&self.pool)
        .await?;

        Ok(garagem)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM garagens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
