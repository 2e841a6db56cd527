use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::veiculo_controller::VeiculoController;
use crate::dto::ApiResponse;
use crate::models::veiculo::{CreateVeiculoRequest, UpdateVeiculoRequest, Veiculo, VeiculoFiltros};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_veiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_veiculos).post(create_veiculo))
        .route("/:id", get(get_veiculo).put(update_veiculo).delete(delete_veiculo))
}

async fn list_veiculos(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<VeiculoFiltros>,
) -> Result<Json<Vec<Veiculo>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.list(filtros).await?;
    Ok(Json(response))
}

async fn create_veiculo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateVeiculoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Veiculo>>), AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_veiculo(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Veiculo>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_veiculo(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateVeiculoRequest>,
) -> Result<Json<ApiResponse<Veiculo>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_veiculo(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Veículo excluído com sucesso"
    })))
}
