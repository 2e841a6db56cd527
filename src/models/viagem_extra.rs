//! Modelo de Viagem Extra
//!
//! Viagem avulsa fora da escala fixa.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ViagemExtra {
    pub id: Uuid,
    pub data_viagem: NaiveDate,
    pub garagem_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,
    pub descricao: Option<String>,
    pub solicitante: Option<String>,
    pub hora_inicio: Option<NaiveTime>,
    pub hora_fim: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SalvarViagemExtraRequest {
    pub data_viagem: NaiveDate,
    pub garagem_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,

    #[validate(length(max = 500))]
    pub descricao: Option<String>,

    #[validate(length(max = 100))]
    pub solicitante: Option<String>,

    pub hora_inicio: Option<NaiveTime>,
    pub hora_fim: Option<NaiveTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViagemExtraFiltros {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub garagem_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
}
