use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::usuario_controller::UsuarioController;
use crate::dto::ApiResponse;
use crate::middleware::auth::admin_only_middleware;
use crate::models::usuario::{PermissaoModulo, RolePermissoes, SubstituirPermissoesRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::JsonBody;

pub fn create_permissao_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_permissoes))
        .route("/:role", get(get_permissoes).put(replace_permissoes))
        .route_layer(middleware::from_fn(admin_only_middleware))
}

async fn list_permissoes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RolePermissoes>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.list_permissoes().await?;
    Ok(Json(response))
}

async fn get_permissoes(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RolePermissoes>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.permissoes_da_role(&role).await?;
    Ok(Json(response))
}

async fn replace_permissoes(
    State(state): State<AppState>,
    Path(role): Path<String>,
    JsonBody(request): JsonBody<SubstituirPermissoesRequest>,
) -> Result<Json<ApiResponse<Vec<PermissaoModulo>>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller
        .substituir_permissoes(&role, request.modulos)
        .await?;
    Ok(Json(response))
}
