use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::viagem_extra_controller::ViagemExtraController;
use crate::dto::ApiResponse;
use crate::models::viagem_extra::{SalvarViagemExtraRequest, ViagemExtra, ViagemExtraFiltros};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_viagem_extra_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_viagens_extras).post(create_viagem_extra))
        .route("/:id", get(get_viagem_extra).put(update_viagem_extra).delete(delete_viagem_extra))
}

async fn list_viagens_extras(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<ViagemExtraFiltros>,
) -> Result<Json<Vec<ViagemExtra>>, AppError> {
    let controller = ViagemExtraController::new(state.pool.clone());
    let response = controller.list(filtros).await?;
    Ok(Json(response))
}

async fn create_viagem_extra(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SalvarViagemExtraRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ViagemExtra>>), AppError> {
    let controller = ViagemExtraController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_viagem_extra(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ViagemExtra>, AppError> {
    let controller = ViagemExtraController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_viagem_extra(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<SalvarViagemExtraRequest>,
) -> Result<Json<ApiResponse<ViagemExtra>>, AppError> {
    let controller = ViagemExtraController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_viagem_extra(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = ViagemExtraController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Viagem extra excluída com sucesso"
    })))
}
