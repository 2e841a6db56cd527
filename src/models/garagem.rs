//! Modelo de Garagem
//!
//! Garagem (depósito) é a unidade organizacional usada pela maioria dos filtros.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Garagem {
    pub id: Uuid,
    pub nome: String,
    pub endereco: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGaragemRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    #[validate(length(max = 255))]
    pub endereco: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGaragemRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: Option<String>,

    #[validate(length(max = 255))]
    pub endereco: Option<String>,
}
