//! Modelo de Motorista
//!
//! `re` é a matrícula interna. Nome e RE são copiados para as viagens da
//! escala no momento em que ela é salva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Motorista {
    pub id: Uuid,
    pub nome: String,
    pub re: String,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub cnh: Option<String>,
    pub garagem_id: Option<Uuid>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

/// Nome e matrícula congelados numa viagem de escala
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MotoristaSnapshot {
    pub id: Uuid,
    pub nome: String,
    pub re: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMotoristaRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: String,

    #[validate(custom = "validate_not_blank", length(max = 20))]
    pub re: String,

    #[validate(length(equal = 11))]
    pub cpf: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub telefone: Option<String>,

    #[validate(length(max = 20))]
    pub cnh: Option<String>,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMotoristaRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,

    #[validate(custom = "validate_not_blank", length(max = 20))]
    pub re: Option<String>,

    #[validate(length(equal = 11))]
    pub cpf: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub telefone: Option<String>,

    #[validate(length(max = 20))]
    pub cnh: Option<String>,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MotoristaFiltros {
    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}
