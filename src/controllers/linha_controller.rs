use crate::dto::ApiResponse;
use crate::models::linha::{CreateLinhaRequest, Linha, LinhaFiltros, UpdateLinhaRequest};
use crate::repositories::linha_repository::LinhaRepository;
use crate::utils::errors::{not_found_error, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct LinhaController {
    repository: LinhaRepository,
}

impl LinhaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LinhaRepository::new(pool),
        }
    }

    /// Cliente inexistente vira 400 pela chave estrangeira
    pub async fn create(&self, request: CreateLinhaRequest) -> AppResult<ApiResponse<Linha>> {
        request.validate()?;
        let linha = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            linha,
            "Linha criada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Linha> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Linha", &id.to_string()))
    }

    pub async fn list(&self, filtros: LinhaFiltros) -> AppResult<Vec<Linha>> {
        self.repository.list(&filtros).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateLinhaRequest) -> AppResult<ApiResponse<Linha>> {
        request.validate()?;
        let linha = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Linha", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            linha,
            "Linha atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Linha", &id.to_string()));
        }
        Ok(())
    }
}
