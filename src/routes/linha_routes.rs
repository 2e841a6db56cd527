use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::linha_controller::LinhaController;
use crate::dto::ApiResponse;
use crate::models::linha::{CreateLinhaRequest, Linha, LinhaFiltros, UpdateLinhaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_linha_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_linhas).post(create_linha))
        .route("/:id", get(get_linha).put(update_linha).delete(delete_linha))
}

async fn list_linhas(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<LinhaFiltros>,
) -> Result<Json<Vec<Linha>>, AppError> {
    let controller = LinhaController::new(state.pool.clone());
    let response = controller.list(filtros).await?;
    Ok(Json(response))
}

async fn create_linha(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateLinhaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Linha>>), AppError> {
    let controller = LinhaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_linha(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Linha>, AppError> {
    let controller = LinhaController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_linha(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateLinhaRequest>,
) -> Result<Json<ApiResponse<Linha>>, AppError> {
    let controller = LinhaController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_linha(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = LinhaController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Linha excluída com sucesso"
    })))
}
