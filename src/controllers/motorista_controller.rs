use crate::dto::ApiResponse;
use crate::models::motorista::{
    CreateMotoristaRequest, Motorista, MotoristaFiltros, UpdateMotoristaRequest,
};
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::utils::errors::{not_found_error, AppResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct MotoristaController {
    repository: MotoristaRepository,
}

impl MotoristaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MotoristaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMotoristaRequest,
    ) -> AppResult<ApiResponse<Motorista>> {
        request.validate()?;
        let motorista = self.repository.create(&request).await?;
        info!("👤 Motorista {} (RE {}) cadastrado", motorista.id, motorista.re);

        Ok(ApiResponse::success_with_message(
            motorista,
            "Motorista cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Motorista> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Motorista", &id.to_string()))
    }

    pub async fn list(&self, filtros: MotoristaFiltros) -> AppResult<Vec<Motorista>> {
        self.repository.list(&filtros).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMotoristaRequest,
    ) -> AppResult<ApiResponse<Motorista>> {
        request.validate()?;
        let motorista = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Motorista", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            motorista,
            "Motorista atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Motorista", &id.to_string()));
        }
        Ok(())
    }
}
