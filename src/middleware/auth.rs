//! Identidade da requisição
//!
//! A autenticação acontece no provedor externo; o gateway repassa a
//! identidade nos cabeçalhos `x-user-id` e `x-user-role`. Aqui só lemos
//! esses valores e barramos as rotas administrativas.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::models::usuario::ROLE_ADMIN;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_uuid;

pub const HEADER_USER_ID: &str = "x-user-id";
pub const HEADER_USER_ROLE: &str = "x-user-role";

/// Usuário informado pelo gateway; ambos os campos são opcionais
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsuarioRequisicao {
    pub id: Option<Uuid>,
    pub role: Option<String>,
}

impl UsuarioRequisicao {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let id = match header_str(headers, HEADER_USER_ID) {
            Some(valor) => Some(parse_uuid(valor, HEADER_USER_ID)?),
            None => None,
        };
        let role = header_str(headers, HEADER_USER_ROLE).map(|r| r.to_lowercase());

        Ok(Self { id, role })
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }

    /// Id obrigatório, para rotas como `/usuarios/me`
    pub fn exigir_id(&self) -> Result<Uuid, AppError> {
        self.id.ok_or_else(|| {
            AppError::Unauthorized(format!("Cabeçalho {} não informado", HEADER_USER_ID))
        })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, nome: &str) -> Option<&'a str> {
    headers
        .get(nome)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for UsuarioRequisicao
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

/// Permite seguir apenas com `x-user-role: admin`
pub async fn admin_only_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    let usuario = UsuarioRequisicao::from_headers(request.headers())?;

    if !usuario.is_admin() {
        warn!(
            "🚫 Acesso negado a {} para role {:?}",
            request.uri().path(),
            usuario.role
        );
        return Err(AppError::Forbidden(
            "Acesso restrito a administradores".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
