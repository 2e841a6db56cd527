//! Modelo de Folga
//!
//! No máximo uma folga por (motorista, data); a regra vive na constraint
//! `folgas_motorista_data_key`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folga {
    pub id: Uuid,
    pub motorista_id: Uuid,
    pub data_folga: NaiveDate,
    pub motivo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SalvarFolgaRequest {
    pub motorista_id: Uuid,
    pub data_folga: NaiveDate,

    #[validate(length(max = 255))]
    pub motivo: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovaFolga {
    pub motorista_id: Uuid,
    pub data_folga: NaiveDate,
    pub motivo: Option<String>,
}

impl From<SalvarFolgaRequest> for NovaFolga {
    fn from(request: SalvarFolgaRequest) -> Self {
        Self {
            motorista_id: request.motorista_id,
            data_folga: request.data_folga,
            motivo: request
                .motivo
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolgaFiltros {
    pub motorista_id: Option<Uuid>,
    pub garagem_id: Option<Uuid>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}
