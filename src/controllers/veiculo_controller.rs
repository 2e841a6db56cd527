use crate::dto::ApiResponse;
use crate::models::veiculo::{CreateVeiculoRequest, UpdateVeiculoRequest, Veiculo, VeiculoFiltros};
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const PLACA_DUPLICADA: &str = "A placa já está cadastrada";

pub struct VeiculoController {
    repository: VeiculoRepository,
}

impl VeiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VeiculoRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVeiculoRequest) -> AppResult<ApiResponse<Veiculo>> {
        request.validate()?;
        let veiculo = self
            .repository
            .create(&request)
            .await
            .map_err(placa_duplicada)?;

        Ok(ApiResponse::success_with_message(
            veiculo,
            "Veículo cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Veiculo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Veículo", &id.to_string()))
    }

    pub async fn list(&self, filtros: VeiculoFiltros) -> AppResult<Vec<Veiculo>> {
        self.repository.list(&filtros).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVeiculoRequest,
    ) -> AppResult<ApiResponse<Veiculo>> {
        request.validate()?;
        let veiculo = self
            .repository
            .update(id, &request)
            .await
            .map_err(placa_duplicada)?
            .ok_or_else(|| not_found_error("Veículo", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            veiculo,
            "Veículo atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Veículo", &id.to_string()));
        }
        Ok(())
    }
}

// A única UNIQUE de veiculos é a placa
fn placa_duplicada(error: AppError) -> AppError {
    match error {
        AppError::Conflict(_) => AppError::Conflict(PLACA_DUPLICADA.to_string()),
        other => other,
    }
}
