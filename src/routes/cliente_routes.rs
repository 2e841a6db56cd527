use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::ApiResponse;
use crate::models::cliente::{Cliente, ClienteFiltros, CreateClienteRequest, UpdateClienteRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes).post(create_cliente))
        .route("/:id", get(get_cliente).put(update_cliente).delete(delete_cliente))
}

async fn list_clientes(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<ClienteFiltros>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.list(filtros).await?;
    Ok(Json(response))
}

async fn create_cliente(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateClienteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Cliente>>), AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_cliente(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_cliente(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateClienteRequest>,
) -> Result<Json<ApiResponse<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_cliente(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Cliente excluído com sucesso"
    })))
}
