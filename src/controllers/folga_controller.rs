use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::folga::{Folga, FolgaFiltros, NovaFolga, SalvarFolgaRequest};
use crate::repositories::FolgaRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_periodo;

pub struct FolgaController {
    repository: Arc<dyn FolgaRepository>,
}

impl FolgaController {
    pub fn new(repository: Arc<dyn FolgaRepository>) -> Self {
        Self { repository }
    }

    pub async fn listar(&self, filtros: FolgaFiltros) -> AppResult<Vec<Folga>> {
        validate_periodo(filtros.data_inicio, filtros.data_fim)?;
        self.repository.listar(&filtros).await
    }

    pub async fn buscar(&self, id: Uuid) -> AppResult<Folga> {
        self.repository
            .buscar(id)
            .await?
            .ok_or_else(|| folga_nao_encontrada(id))
    }

    pub async fn criar(&self, request: SalvarFolgaRequest) -> AppResult<ApiResponse<Folga>> {
        request.validate()?;

        let folga = self.repository.criar(NovaFolga::from(request)).await?;
        info!(
            "🏖️ Folga registrada para motorista {} em {}",
            folga.motorista_id, folga.data_folga
        );

        Ok(ApiResponse::success_with_message(
            folga,
            "Folga registrada com sucesso".to_string(),
        ))
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        request: SalvarFolgaRequest,
    ) -> AppResult<ApiResponse<Folga>> {
        request.validate()?;

        let folga = self
            .repository
            .atualizar(id, NovaFolga::from(request))
            .await?
            .ok_or_else(|| folga_nao_encontrada(id))?;

        Ok(ApiResponse::success_with_message(
            folga,
            "Folga atualizada com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.excluir(id).await? {
            return Err(folga_nao_encontrada(id));
        }
        Ok(())
    }
}

fn folga_nao_encontrada(id: Uuid) -> AppError {
    AppError::NotFound(format!("Folga {} não encontrada", id))
}
