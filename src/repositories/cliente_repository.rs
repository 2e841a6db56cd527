use crate::models::cliente::{Cliente, ClienteFiltros, CreateClienteRequest, UpdateClienteRequest};
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

const CLIENTE_COLUMNS: &str = "id, nome, cnpj, contato, telefone, ativo, created_at";

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateClienteRequest) -> AppResult<Cliente> {
        let cliente = sqlx::query_as::<_, Cliente>(&format!(
            r#"
            INSERT INTO clientes (id, nome, cnpj, contato, telefone, ativo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CLIENTE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(request.nome.trim())
        .bind(&request.cnpj)
        .bind(&request.contato)
        .bind(&request.telefone)
        .bind(request.ativo.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>(&format!(
            "SELECT {} FROM clientes WHERE id = $1",
            CLIENTE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn list(&self, filtros: &ClienteFiltros) -> AppResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>(&format!(
            "SELECT {} FROM clientes WHERE ($1::boolean IS NULL OR ativo = $1) ORDER BY nome",
            CLIENTE_COLUMNS
        ))
        .bind(filtros.ativo)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateClienteRequest) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>(&format!(
            r#"
            UPDATE clientes
            SET nome = COALESCE($2, nome),
                cnpj = COALESCE($3, cnpj),
                contato = COALESCE($4, contato),
                telefone = COALESCE($5, telefone),
                ativo = COALESCE($6, ativo)
            WHERE id = $1
            RETURNING {}
            "#,
            CLIENTE_COLUMNS
        ))
        .bind(id)
        .bind(request.nome.as_deref().map(str::trim))
        .bind(&request.cnpj)
        .bind(&request.contato)
        .bind(&request.telefone)
        .bind(request.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Remove o cliente e, em cascata, suas linhas
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
