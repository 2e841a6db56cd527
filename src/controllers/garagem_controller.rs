use crate::dto::ApiResponse;
use crate::models::garagem::{CreateGaragemRequest, Garagem, UpdateGaragemRequest};
use crate::repositories::garagem_repository::GaragemRepository;
use crate::utils::errors::{not_found_error, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct GaragemController {
    repository: GaragemRepository,
}

impl GaragemController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GaragemRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateGaragemRequest) -> AppResult<ApiResponse<Garagem>> {
        request.validate()?;
        let garagem = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            garagem,
            "Garagem criada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Garagem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Garagem", &id.to_string()))
    }

    pub async fn list(&self) -> AppResult<Vec<Garagem>> {
        self.repository.list_all().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateGaragemRequest,
    ) -> AppResult<ApiResponse<Garagem>> {
        request.validate()?;
        let garagem = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Garagem", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            garagem,
            "Garagem atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Garagem", &id.to_string()));
        }
        Ok(())
    }
}
