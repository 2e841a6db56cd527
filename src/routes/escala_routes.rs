use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::escala_controller::EscalaController;
use crate::dto::ApiResponse;
use crate::middleware::auth::UsuarioRequisicao;
use crate::models::escala::{
    DuplicarEscalaRequest, EscalaDetalhe, EscalaFiltros, EscalaResumo, SalvarEscalaRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, OptionalJsonBody, QueryParams};

pub fn create_escala_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_escalas).post(create_escala))
        .route("/:id", get(get_escala).put(update_escala).delete(delete_escala))
        .route("/:id/duplicar", post(duplicate_escala))
}

fn controller(state: &AppState) -> EscalaController {
    EscalaController::new(state.escalas.clone())
}

async fn list_escalas(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<EscalaFiltros>,
) -> Result<Json<Vec<EscalaResumo>>, AppError> {
    let response = controller(&state).listar(filtros).await?;
    Ok(Json(response))
}

async fn create_escala(
    State(state): State<AppState>,
    usuario: UsuarioRequisicao,
    JsonBody(request): JsonBody<SalvarEscalaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EscalaDetalhe>>), AppError> {
    let response = controller(&state).criar(request, usuario.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_escala(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<EscalaDetalhe>, AppError> {
    let response = controller(&state).buscar(id).await?;
    Ok(Json(response))
}

async fn update_escala(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<SalvarEscalaRequest>,
) -> Result<Json<ApiResponse<EscalaDetalhe>>, AppError> {
    let response = controller(&state).atualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_escala(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    controller(&state).excluir(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Escala excluída com sucesso"
    })))
}

/// Corpo vazio mantém data e garagem; corpo malformado é 400
async fn duplicate_escala(
    State(state): State<AppState>,
    usuario: UsuarioRequisicao,
    IdPath(id): IdPath,
    OptionalJsonBody(request): OptionalJsonBody<DuplicarEscalaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EscalaDetalhe>>), AppError> {
    let overrides = request.unwrap_or_default();
    let response = controller(&state).duplicar(id, overrides, usuario.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
