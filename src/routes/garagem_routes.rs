use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::garagem_controller::GaragemController;
use crate::dto::ApiResponse;
use crate::models::garagem::{CreateGaragemRequest, Garagem, UpdateGaragemRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody};

pub fn create_garagem_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_garagens).post(create_garagem))
        .route("/:id", get(get_garagem).put(update_garagem).delete(delete_garagem))
}

async fn list_garagens(
    State(state): State<AppState>,
) -> Result<Json<Vec<Garagem>>, AppError> {
    let controller = GaragemController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_garagem(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateGaragemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Garagem>>), AppError> {
    let controller = GaragemController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_garagem(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Garagem>, AppError> {
    let controller = GaragemController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_garagem(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateGaragemRequest>,
) -> Result<Json<ApiResponse<Garagem>>, AppError> {
    let controller = GaragemController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_garagem(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    let controller = GaragemController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Garagem excluída com sucesso"
    })))
}
