use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::controllers::painel_controller::PainelController;
use crate::models::painel::{PainelMotorista, PainelQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{IdPath, QueryParams};

pub fn create_painel_router() -> Router<AppState> {
    Router::new().route("/:id", get(painel_motorista))
}

/// Sem `?data=` usa o dia corrente
async fn painel_motorista(
    State(state): State<AppState>,
    IdPath(motorista_id): IdPath,
    QueryParams(query): QueryParams<PainelQuery>,
) -> Result<Json<PainelMotorista>, AppError> {
    let data = query.data.unwrap_or_else(|| Utc::now().date_naive());
    let controller = PainelController::new(state.pool.clone());
    let response = controller.painel(motorista_id, data).await?;
    Ok(Json(response))
}
