//! Rotas HTTP
//!
//! Cada recurso tem seu router em `*_routes.rs`; `create_router` monta a
//! aplicação completa com estado, CORS e trace.

pub mod cliente_routes;
pub mod dashboard_routes;
pub mod escala_routes;
pub mod folga_routes;
pub mod garagem_routes;
pub mod itinerario_routes;
pub mod linha_routes;
pub mod motorista_routes;
pub mod painel_routes;
pub mod permissao_routes;
pub mod usuario_routes;
pub mod veiculo_routes;
pub mod viagem_extra_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.is_development(), &state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/garagens", garagem_routes::create_garagem_router())
        .nest("/clientes", cliente_routes::create_cliente_router())
        .nest("/linhas", linha_routes::create_linha_router())
        .nest("/motoristas", motorista_routes::create_motorista_router())
        .nest("/veiculos", veiculo_routes::create_veiculo_router())
        .nest("/escalas", escala_routes::create_escala_router())
        .nest("/itinerarios", itinerario_routes::create_itinerario_router())
        .nest("/folgas", folga_routes::create_folga_router())
        .nest("/viagens-extras", viagem_extra_routes::create_viagem_extra_router())
        .nest("/usuarios", usuario_routes::create_usuario_router())
        .nest("/permissoes", permissao_routes::create_permissao_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/painelmotorista", painel_routes::create_painel_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
