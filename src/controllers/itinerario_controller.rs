use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::itinerario::{
    Itinerario, ItinerarioDetalhe, ItinerarioFiltros, NovaParada, NovoItinerario,
    SalvarItinerarioRequest,
};
use crate::repositories::ItinerarioRepository;
use crate::services::itinerario_service::{normalizar_dias, novo_itinerario, preparar_paradas};
use crate::utils::errors::{AppError, AppResult};

pub struct ItinerarioController {
    repository: Arc<dyn ItinerarioRepository>,
}

impl ItinerarioController {
    pub fn new(repository: Arc<dyn ItinerarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn listar(&self, filtros: ItinerarioFiltros) -> AppResult<Vec<Itinerario>> {
        self.repository.listar(&filtros).await
    }

    pub async fn buscar(&self, id: Uuid) -> AppResult<ItinerarioDetalhe> {
        self.repository
            .buscar(id)
            .await?
            .ok_or_else(|| itinerario_nao_encontrado(id))
    }

    /// Cria ou atualiza pela chave (cliente, linha, garagem, turno)
    pub async fn salvar(
        &self,
        request: SalvarItinerarioRequest,
        hoje: NaiveDate,
    ) -> AppResult<ApiResponse<ItinerarioDetalhe>> {
        let (itinerario, dias, paradas) = self.preparar(request, hoje).await?;

        let detalhe = self.repository.salvar(itinerario, dias, paradas).await?;
        info!(
            "🧭 Itinerário {} salvo ({} paradas, {} dias)",
            detalhe.itinerario.id,
            detalhe.paradas.len(),
            detalhe.dias.len()
        );

        Ok(ApiResponse::success_with_message(
            detalhe,
            "Itinerário salvo com sucesso".to_string(),
        ))
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        request: SalvarItinerarioRequest,
        hoje: NaiveDate,
    ) -> AppResult<ApiResponse<ItinerarioDetalhe>> {
        let (itinerario, dias, paradas) = self.preparar(request, hoje).await?;

        let detalhe = self
            .repository
            .substituir(id, itinerario, dias, paradas)
            .await?
            .ok_or_else(|| itinerario_nao_encontrado(id))?;
        info!("🧭 Itinerário {} atualizado", id);

        Ok(ApiResponse::success_with_message(
            detalhe,
            "Itinerário atualizado com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.excluir(id).await? {
            return Err(itinerario_nao_encontrado(id));
        }
        info!("🗑️ Itinerário {} excluído", id);
        Ok(())
    }

    async fn preparar(
        &self,
        request: SalvarItinerarioRequest,
        hoje: NaiveDate,
    ) -> AppResult<(NovoItinerario, Vec<i16>, Vec<NovaParada>)> {
        request.validate()?;
        let dias = normalizar_dias(&request.dias)?;

        let nomes = self
            .repository
            .nomes(request.cliente_id, request.linha_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Cliente ou linha inexistente".to_string()))?;

        let itinerario = novo_itinerario(&request, &nomes, hoje)?;
        let paradas = preparar_paradas(request.paradas);

        Ok((itinerario, dias, paradas))
    }
}

fn itinerario_nao_encontrado(id: Uuid) -> AppError {
    AppError::NotFound(format!("Itinerário {} não encontrado", id))
}
