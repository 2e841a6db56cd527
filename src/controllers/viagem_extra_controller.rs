use crate::dto::ApiResponse;
use crate::models::viagem_extra::{SalvarViagemExtraRequest, ViagemExtra, ViagemExtraFiltros};
use crate::repositories::viagem_extra_repository::ViagemExtraRepository;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::validate_periodo;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ViagemExtraController {
    repository: ViagemExtraRepository,
}

impl ViagemExtraController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ViagemExtraRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: SalvarViagemExtraRequest,
    ) -> AppResult<ApiResponse<ViagemExtra>> {
        request.validate()?;
        let viagem = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            viagem,
            "Viagem extra registrada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ViagemExtra> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Viagem extra", &id.to_string()))
    }

    pub async fn list(&self, filtros: ViagemExtraFiltros) -> AppResult<Vec<ViagemExtra>> {
        validate_periodo(filtros.data_inicio, filtros.data_fim)?;
        self.repository.list(&filtros).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: SalvarViagemExtraRequest,
    ) -> AppResult<ApiResponse<ViagemExtra>> {
        request.validate()?;
        let viagem = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Viagem extra", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            viagem,
            "Viagem extra atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Viagem extra", &id.to_string()));
        }
        Ok(())
    }
}
