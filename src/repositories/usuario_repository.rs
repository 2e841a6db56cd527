use std::collections::BTreeMap;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::usuario::{
    CreatePerfilRequest, PermissaoInput, PermissaoModulo, PerfilUsuario, RolePermissoes,
    RoleUsuario, UpdatePerfilRequest,
};
use crate::utils::errors::AppResult;

const PERFIL_COLUMNS: &str = "id, nome, email, role_codigo, garagem_id, ativo, created_at";

/// Perfis de usuário, roles e matriz de permissões
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PerfilUsuario>> {
        let perfil = sqlx::query_as::<_, PerfilUsuario>(&format!(
            "SELECT {} FROM perfis_usuarios WHERE id = $1",
            PERFIL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(perfil)
    }

    pub async fn list_all(&self) -> AppResult<Vec<PerfilUsuario>> {
        let perfis = sqlx::query_as::<_, PerfilUsuario>(&format!(
            "SELECT {} FROM perfis_usuarios ORDER BY nome",
            PERFIL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(perfis)
    }

    pub async fn create(&self, request: &CreatePerfilRequest) -> AppResult<PerfilUsuario> {
        let perfil = sqlx::query_as::<_, PerfilUsuario>(&format!(
            r#"
            INSERT INTO perfis_usuarios (id, nome, email, role_codigo, garagem_id, ativo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            PERFIL_COLUMNS
        ))
        .bind(request.id)
        .bind(request.nome.trim())
        .bind(request.email.trim().to_lowercase())
        .bind(&request.role_codigo)
        .bind(request.garagem_id)
        .bind(request.ativo.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(perfil)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdatePerfilRequest,
    ) -> AppResult<Option<PerfilUsuario>> {
        let perfil = sqlx::query_as::<_, PerfilUsuario>(&format!(
            r#"
            UPDATE perfis_usuarios
            SET nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                role_codigo = COALESCE($4, role_codigo),
                garagem_id = COALESCE($5, garagem_id),
                ativo = COALESCE($6, ativo)
            WHERE id = $1
            RETURNING {}
            "#,
            PERFIL_COLUMNS
        ))
        .bind(id)
        .bind(request.nome.as_deref().map(str::trim))
        .bind(request.email.as_deref().map(|e| e.trim().to_lowercase()))
        .bind(&request.role_codigo)
        .bind(request.garagem_id)
        .bind(request.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(perfil)
    }

    pub async fn find_role(&self, codigo: &str) -> AppResult<Option<RoleUsuario>> {
        let role = sqlx::query_as::<_, RoleUsuario>(
            "SELECT codigo, descricao FROM roles_usuario WHERE codigo = $1",
        )
        .bind(codigo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(role)
    }

    /// Todas as roles com seus módulos, ordenadas por código
    pub async fn list_permissoes(&self) -> AppResult<Vec<RolePermissoes>> {
        let roles = sqlx::query_as::<_, RoleUsuario>(
            "SELECT codigo, descricao FROM roles_usuario ORDER BY codigo",
        )
        .fetch_all(&self.pool)
        .await?;

        let permissoes = sqlx::query_as::<_, PermissaoModulo>(
            r#"
            SELECT role_codigo, modulo, pode_visualizar, pode_editar
            FROM permissoes_modulos
            ORDER BY role_codigo, modulo
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut por_role: BTreeMap<String, Vec<PermissaoModulo>> = BTreeMap::new();
        for permissao in permissoes {
            por_role
                .entry(permissao.role_codigo.clone())
                .or_default()
                .push(permissao);
        }

        Ok(roles
            .into_iter()
            .map(|role| {
                let modulos = por_role.remove(&role.codigo).unwrap_or_default();
                RolePermissoes { role, modulos }
            })
            .collect())
    }

    pub async fn permissoes_da_role(&self, codigo: &str) -> AppResult<Vec<PermissaoModulo>> {
        let permissoes = sqlx::query_as::<_, PermissaoModulo>(
            r#"
            SELECT role_codigo, modulo, pode_visualizar, pode_editar
            FROM permissoes_modulos
            WHERE role_codigo = $1
            ORDER BY modulo
            "#,
        )
        .bind(codigo)
        .fetch_all(&self.pool)
        .await?;

        Ok(permissoes)
    }

    /// Regrava a lista de módulos da role numa única transação
    pub async fn substituir_permissoes(
        &self,
        codigo: &str,
        modulos: &[PermissaoInput],
    ) -> AppResult<Vec<PermissaoModulo>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM permissoes_modulos WHERE role_codigo = $1")
            .bind(codigo)
            .execute(&mut *tx)
            .await?;

        let mut inseridas = Vec::new();
        if !modulos.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO permissoes_modulos (role_codigo, modulo, pode_visualizar, pode_editar) ",
            );
            builder.push_values(modulos, |mut row, modulo| {
                row.push_bind(codigo)
                    .push_bind(modulo.modulo.trim().to_lowercase())
                    .push_bind(modulo.pode_visualizar)
                    .push_bind(modulo.pode_editar);
            });
            builder.push(" RETURNING role_codigo, modulo, pode_visualizar, pode_editar");

            inseridas = builder
                .build_query_as::<PermissaoModulo>()
                .fetch_all(&mut *tx)
                .await?;
            inseridas.sort_by(|a, b| a.modulo.cmp(&b.modulo));
        }

        tx.commit().await?;
        Ok(inseridas)
    }
}
