use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::models::dashboard::{BaldeChave, DashboardFiltros, DashboardResumo};
use crate::services::dashboard_service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::QueryParams;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/resumo", get(resumo))
        .route("/por-garagem", get(por_garagem))
        .route("/por-cliente", get(por_cliente))
}

async fn calcular(state: &AppState, filtros: &DashboardFiltros) -> Result<DashboardResumo, AppError> {
    DashboardService::new(state.dashboard.clone())
        .resumo(filtros)
        .await
}

async fn resumo(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<DashboardFiltros>,
) -> Result<Json<DashboardResumo>, AppError> {
    Ok(Json(calcular(&state, &filtros).await?))
}

async fn por_garagem(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<DashboardFiltros>,
) -> Result<Json<Vec<BaldeChave>>, AppError> {
    Ok(Json(calcular(&state, &filtros).await?.por_garagem))
}

async fn por_cliente(
    State(state): State<AppState>,
    QueryParams(filtros): QueryParams<DashboardFiltros>,
) -> Result<Json<Vec<BaldeChave>>, AppError> {
    Ok(Json(calcular(&state, &filtros).await?.por_cliente))
}
