//! Modelo de Cliente
//!
//! Empresa contratante das linhas fretadas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id: Uuid,
    pub nome: String,
    pub cnpj: Option<String>,
    pub contato: Option<String>,
    pub telefone: Option<String>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: String,

    #[validate(length(min = 14, max = 18))]
    pub cnpj: Option<String>,

    #[validate(length(max = 100))]
    pub contato: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub telefone: Option<String>,

    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClienteRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,

    #[validate(length(min = 14, max = 18))]
    pub cnpj: Option<String>,

    #[validate(length(max = 100))]
    pub contato: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub telefone: Option<String>,

    pub ativo: Option<bool>,
}

/// Filtros da listagem de clientes
#[derive(Debug, Default, Deserialize)]
pub struct ClienteFiltros {
    pub ativo: Option<bool>,
}
