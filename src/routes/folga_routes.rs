use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::folga_controller::FolgaController;
use crate::dto::ApiResponse;
use crate::models::folga::{Folga, FolgaFiltros, SalvarFolgaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_folga_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_folgas).post(create_folga))
        .route("/:id", get(get_folga).put(update_folga).delete(delete_folga))
}

fn controller(state: &AppState) -> FolgaController {
    FolgaController::new(state.folgas.clone())
}

async fn list_folgas(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<FolgaFiltros>,
) -> Result<Json<Vec<Folga>>, AppError> {
    let response = controller(&state).listar(filtros).await?;
    Ok(Json(response))
}

async fn create_folga(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SalvarFolgaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folga>>), AppError> {
    let response = controller(&state).criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_folga(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Folga>, AppError> {
    let response = controller(&state).buscar(id).await?;
    Ok(Json(response))
}

async fn update_folga(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<SalvarFolgaRequest>,
) -> Result<Json<ApiResponse<Folga>>, AppError> {
    let response = controller(&state).atualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_folga(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    controller(&state).excluir(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Folga excluída com sucesso"
    })))
}
