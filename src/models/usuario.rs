//! Modelos de usuário
//!
//! Perfis (`perfis_usuarios`), roles (`roles_usuario`) e a matriz de
//! permissões por módulo (`permissoes_modulos`). A autenticação em si
//! acontece fora deste serviço.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_role_codigo;

/// Role de administrador, única que acessa usuários e permissões
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PerfilUsuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub role_codigo: String,
    pub garagem_id: Option<Uuid>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

/// Cria o perfil de uma identidade já existente no provedor de auth
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePerfilRequest {
    pub id: Uuid,

    #[validate(length(min = 2, max = 150))]
    pub nome: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "validate_role_codigo")]
    pub role_codigo: String,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePerfilRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(custom = "validate_role_codigo")]
    pub role_codigo: Option<String>,

    pub garagem_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleUsuario {
    pub codigo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermissaoModulo {
    pub role_codigo: String,
    pub modulo: String,
    pub pode_visualizar: bool,
    pub pode_editar: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolePermissoes {
    #[serde(flatten)]
    pub role: RoleUsuario,
    pub modulos: Vec<PermissaoModulo>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PermissaoInput {
    #[validate(length(min = 2, max = 50))]
    pub modulo: String,
    pub pode_visualizar: bool,
    pub pode_editar: bool,
}

/// Corpo do `PUT /permissoes/:role`: lista completa de módulos da role
#[derive(Debug, Clone, Deserialize)]
pub struct SubstituirPermissoesRequest {
    #[serde(default)]
    pub modulos: Vec<PermissaoInput>,
}
