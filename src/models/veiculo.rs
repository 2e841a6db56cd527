//! Modelo de Veículo
//!
//! Mapeia a tabela `veiculos`. A placa é única e gravada em maiúsculas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_placa;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Veiculo {
    pub id: Uuid,
    pub prefixo: Option<String>,
    pub placa: String,
    pub tipo: Option<String>,
    pub capacidade: Option<i32>,
    pub garagem_id: Option<Uuid>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVeiculoRequest {
    #[validate(length(min = 1, max = 20))]
    pub prefixo: Option<String>,

    #[validate(custom = "validate_placa")]
    pub placa: String,

    /// Ônibus, micro-ônibus, van...
    #[validate(length(min = 2, max = 50))]
    pub tipo: Option<String>,

    #[validate(range(min = 1, max = 120))]
    pub capacidade: Option<i32>,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVeiculoRequest {
    #[validate(length(min = 1, max = 20))]
    pub prefixo: Option<String>,

    #[validate(custom = "validate_placa")]
    pub placa: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub tipo: Option<String>,

    #[validate(range(min = 1, max = 120))]
    pub capacidade: Option<i32>,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VeiculoFiltros {
    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}
