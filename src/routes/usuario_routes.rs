use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::usuario_controller::UsuarioController;
use crate::dto::ApiResponse;
use crate::middleware::auth::{admin_only_middleware, UsuarioRequisicao};
use crate::models::usuario::{CreatePerfilRequest, PerfilUsuario, UpdatePerfilRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody};

/// `/me` fica aberto a qualquer identidade; o restante exige admin
pub fn create_usuario_router() -> Router<AppState> {
    let admin = Router::new()
        .route("/", get(list_usuarios).post(create_usuario))
        .route("/:id", get(get_usuario).put(update_usuario))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new().route("/me", get(me)).merge(admin)
}

async fn me(
    State(state): State<AppState>,
    usuario: UsuarioRequisicao,
) -> Result<Json<PerfilUsuario>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.me(&usuario).await?;
    Ok(Json(response))
}

async fn list_usuarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<PerfilUsuario>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_usuario(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePerfilRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PerfilUsuario>>), AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_usuario(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PerfilUsuario>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_usuario(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdatePerfilRequest>,
) -> Result<Json<ApiResponse<PerfilUsuario>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
