use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::escala::{
    DuplicarEscalaRequest, EscalaDetalhe, EscalaFiltros, EscalaResumo, SalvarEscalaRequest,
};
use crate::repositories::EscalaRepository;
use crate::services::escala_service::{
    motoristas_citados, nova_escala, preparar_duplicacao, preparar_viagens,
};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_periodo;

pub struct EscalaController {
    repository: Arc<dyn EscalaRepository>,
}

impl EscalaController {
    pub fn new(repository: Arc<dyn EscalaRepository>) -> Self {
        Self { repository }
    }

    pub async fn listar(&self, filtros: EscalaFiltros) -> AppResult<Vec<EscalaResumo>> {
        validate_periodo(filtros.data_inicio, filtros.data_fim)?;
        self.repository.listar(&filtros).await
    }

    pub async fn buscar(&self, id: Uuid) -> AppResult<EscalaDetalhe> {
        self.repository
            .buscar(id)
            .await?
            .ok_or_else(|| escala_nao_encontrada(id))
    }

    pub async fn criar(
        &self,
        request: SalvarEscalaRequest,
        usuario: Option<Uuid>,
    ) -> AppResult<ApiResponse<EscalaDetalhe>> {
        request.validate()?;

        let snapshots = self
            .repository
            .snapshots_motoristas(&motoristas_citados(&request.viagens))
            .await?;
        let viagens = preparar_viagens(request.viagens, &snapshots)?;
        let escala = nova_escala(request.data_escala, request.garagem_id, usuario);

        let detalhe = self.repository.criar(escala, viagens).await?;
        info!(
            "🗓️ Escala {} criada para {} com {} viagens",
            detalhe.escala.id,
            detalhe.escala.data_escala,
            detalhe.viagens.len()
        );

        Ok(ApiResponse::success_with_message(
            detalhe,
            "Escala criada com sucesso".to_string(),
        ))
    }

    /// Regrava cabeçalho e viagens; `criado_por` é preservado
    pub async fn atualizar(
        &self,
        id: Uuid,
        request: SalvarEscalaRequest,
    ) -> AppResult<ApiResponse<EscalaDetalhe>> {
        request.validate()?;

        let snapshots = self
            .repository
            .snapshots_motoristas(&motoristas_citados(&request.viagens))
            .await?;
        let viagens = preparar_viagens(request.viagens, &snapshots)?;
        let escala = nova_escala(request.data_escala, request.garagem_id, None);

        let detalhe = self
            .repository
            .substituir(id, escala, viagens)
            .await?
            .ok_or_else(|| escala_nao_encontrada(id))?;
        info!("🗓️ Escala {} atualizada ({} viagens)", id, detalhe.viagens.len());

        Ok(ApiResponse::success_with_message(
            detalhe,
            "Escala atualizada com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.excluir(id).await? {
            return Err(escala_nao_encontrada(id));
        }
        info!("🗑️ Escala {} excluída", id);
        Ok(())
    }

    pub async fn duplicar(
        &self,
        id: Uuid,
        overrides: DuplicarEscalaRequest,
        usuario: Option<Uuid>,
    ) -> AppResult<ApiResponse<EscalaDetalhe>> {
        let original = self.buscar(id).await?;
        let (escala, viagens) = preparar_duplicacao(&original, &overrides, usuario);

        let copia = self.repository.criar(escala, viagens).await?;
        info!(
            "📋 Escala {} duplicada como {} ({} viagens)",
            id,
            copia.escala.id,
            copia.viagens.len()
        );

        Ok(ApiResponse::success_with_message(
            copia,
            "Escala duplicada com sucesso".to_string(),
        ))
    }
}

fn escala_nao_encontrada(id: Uuid) -> AppError {
    AppError::NotFound(format!("Escala {} não encontrada", id))
}
