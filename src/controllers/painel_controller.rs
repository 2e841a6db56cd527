use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::painel::PainelMotorista;
use crate::repositories::painel_repository::PainelRepository;
use crate::services::painel_service::montar_painel;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PainelController {
    repository: PainelRepository,
}

impl PainelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PainelRepository::new(pool),
        }
    }

    pub async fn painel(&self, motorista_id: Uuid, data: NaiveDate) -> AppResult<PainelMotorista> {
        let motorista = self
            .repository
            .motorista(motorista_id)
            .await?
            .ok_or_else(|| not_found_error("Motorista", &motorista_id.to_string()))?;

        let (em_folga, viagens, extras) = tokio::try_join!(
            self.repository.em_folga(motorista_id, data),
            self.repository.viagens(motorista_id, data),
            self.repository.viagens_extras(motorista_id, data),
        )?;

        Ok(montar_painel(motorista, data, em_folga, viagens, extras))
    }
}
