//! Modelo de Linha
//!
//! Uma linha pertence a um cliente; itinerários e viagens apontam para ela.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Linha {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub codigo: Option<String>,
    pub nome: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinhaRequest {
    pub cliente_id: Uuid,

    #[validate(length(min = 1, max = 20))]
    pub codigo: Option<String>,

    #[validate(length(min = 2, max = 150))]
    pub nome: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinhaRequest {
    pub cliente_id: Option<Uuid>,

    #[validate(length(min = 1, max = 20))]
    pub codigo: Option<String>,

    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinhaFiltros {
    pub cliente_id: Option<Uuid>,
}
