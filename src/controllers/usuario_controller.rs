use std::collections::HashSet;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::middleware::auth::UsuarioRequisicao;
use crate::models::usuario::{
    CreatePerfilRequest, PermissaoInput, PermissaoModulo, PerfilUsuario, RolePermissoes,
    UpdatePerfilRequest,
};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct UsuarioController {
    repository: UsuarioRepository,
}

impl UsuarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
        }
    }

    /// Perfil do próprio usuário: 401 sem identidade, 404 sem perfil,
    /// 403 com perfil inativo
    pub async fn me(&self, usuario: &UsuarioRequisicao) -> AppResult<PerfilUsuario> {
        let id = usuario.exigir_id()?;

        let perfil = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil de usuário não encontrado".to_string()))?;

        if !perfil.ativo {
            return Err(AppError::Forbidden("Usuário inativo".to_string()));
        }

        Ok(perfil)
    }

    pub async fn list(&self) -> AppResult<Vec<PerfilUsuario>> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<PerfilUsuario> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Usuário", &id.to_string()))
    }

    pub async fn create(
        &self,
        request: CreatePerfilRequest,
    ) -> AppResult<ApiResponse<PerfilUsuario>> {
        request.validate()?;
        let perfil = self.repository.create(&request).await?;
        info!("👤 Perfil {} criado com role {}", perfil.id, perfil.role_codigo);

        Ok(ApiResponse::success_with_message(
            perfil,
            "Usuário criado com sucesso".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePerfilRequest,
    ) -> AppResult<ApiResponse<PerfilUsuario>> {
        request.validate()?;
        let perfil = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Usuário", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            perfil,
            "Usuário atualizado com sucesso".to_string(),
        ))
    }

    pub async fn list_permissoes(&self) -> AppResult<Vec<RolePermissoes>> {
        self.repository.list_permissoes().await
    }

    pub async fn permissoes_da_role(&self, codigo: &str) -> AppResult<RolePermissoes> {
        let role = self
            .repository
            .find_role(codigo)
            .await?
            .ok_or_else(|| role_nao_encontrada(codigo))?;
        let modulos = self.repository.permissoes_da_role(&role.codigo).await?;

        Ok(RolePermissoes { role, modulos })
    }

    pub async fn substituir_permissoes(
        &self,
        codigo: &str,
        modulos: Vec<PermissaoInput>,
    ) -> AppResult<ApiResponse<Vec<PermissaoModulo>>> {
        for modulo in &modulos {
            modulo.validate()?;
        }
        validar_modulos_unicos(&modulos)?;

        let role = self
            .repository
            .find_role(codigo)
            .await?
            .ok_or_else(|| role_nao_encontrada(codigo))?;

        let permissoes = self
            .repository
            .substituir_permissoes(&role.codigo, &modulos)
            .await?;
        info!(
            "🔐 Permissões da role {} regravadas ({} módulos)",
            role.codigo,
            permissoes.len()
        );

        Ok(ApiResponse::success_with_message(
            permissoes,
            "Permissões atualizadas com sucesso".to_string(),
        ))
    }
}

fn role_nao_encontrada(codigo: &str) -> AppError {
    AppError::NotFound(format!("Role '{}' não encontrada", codigo))
}

fn validar_modulos_unicos(modulos: &[PermissaoInput]) -> AppResult<()> {
    let mut vistos = HashSet::new();
    for modulo in modulos {
        let nome = modulo.modulo.trim().to_lowercase();
        if !vistos.insert(nome.clone()) {
            return Err(AppError::BadRequest(format!(
                "Módulo '{}' informado mais de uma vez",
                nome
            )));
        }
    }
    Ok(())
}
