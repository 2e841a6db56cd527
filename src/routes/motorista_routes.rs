use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::motorista_controller::MotoristaController;
use crate::dto::ApiResponse;
use crate::models::motorista::{CreateMotoristaRequest, Motorista, MotoristaFiltros, UpdateMotoristaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_motorista_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_motoristas).post(create_motorista))
        .route("/:id", get(get_motorista).put(update_motorista).delete(delete_motorista))
}

async fn list_motoristas(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<MotoristaFiltros>,
) -> Result<Json<Vec<Motorista>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.list(filtros).await?;
    Ok(Json(response))
}

async fn create_motorista(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateMotoristaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Motorista>>), AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_motorista(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Motorista>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_motorista(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateMotoristaRequest>,
) -> Result<Json<ApiResponse<Motorista>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_motorista(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Motorista excluído com sucesso"
    })))
}
