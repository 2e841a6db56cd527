use crate::dto::ApiResponse;
use crate::models::cliente::{Cliente, ClienteFiltros, CreateClienteRequest, UpdateClienteRequest};
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::{not_found_error, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClienteRequest) -> AppResult<ApiResponse<Cliente>> {
        request.validate()?;
        let cliente = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            cliente,
            "Cliente criado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Cliente> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cliente", &id.to_string()))
    }

    pub async fn list(&self, filtros: ClienteFiltros) -> AppResult<Vec<Cliente>> {
        self.repository.list(&filtros).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClienteRequest,
    ) -> AppResult<ApiResponse<Cliente>> {
        request.validate()?;
        let cliente = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Cliente", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            cliente,
            "Cliente atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Cliente", &id.to_string()));
        }
        Ok(())
    }
}
