use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::controllers::itinerario_controller::ItinerarioController;
use crate::dto::ApiResponse;
use crate::models::itinerario::{
    Itinerario, ItinerarioDetalhe, ItinerarioFiltros, SalvarItinerarioRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, JsonBody, QueryParams};

pub fn create_itinerario_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_itinerarios).post(save_itinerario))
        .route(
            "/:id",
            get(get_itinerario)
                .put(update_itinerario)
                .delete(delete_itinerario),
        )
}

fn controller(state: &AppState) -> ItinerarioController {
    ItinerarioController::new(state.itinerarios.clone())
}

async fn list_itinerarios(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<ItinerarioFiltros>,
) -> Result<Json<Vec<Itinerario>>, AppError> {
    let response = controller(&state).listar(filtros).await?;
    Ok(Json(response))
}

async fn save_itinerario(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SalvarItinerarioRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ItinerarioDetalhe>>), AppError> {
    let hoje = Utc::now().date_naive();
    let response = controller(&state).salvar(request, hoje).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_itinerario(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ItinerarioDetalhe>, AppError> {
    let response = controller(&state).buscar(id).await?;
    Ok(Json(response))
}

async fn update_itinerario(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<SalvarItinerarioRequest>,
) -> Result<Json<ApiResponse<ItinerarioDetalhe>>, AppError> {
    let hoje = Utc::now().date_naive();
    let response = controller(&state).atualizar(id, request, hoje).await?;
    Ok(Json(response))
}

async fn delete_itinerario(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    controller(&state).excluir(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Itinerário excluído com sucesso"
    })))
}
