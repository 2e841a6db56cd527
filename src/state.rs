//! Estado compartilhado da aplicação
//!
//! Passado para todos os handlers via `State<AppState>`.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::repositories::{
    DashboardRepository, EscalaRepository, FolgaRepository, ItinerarioRepository,
    PgDashboardRepository, PgEscalaRepository, PgFolgaRepository, PgItinerarioRepository,
};

/// Armazenamentos com implementação trocável
#[derive(Clone)]
pub struct Stores {
    pub escalas: Arc<dyn EscalaRepository>,
    pub itinerarios: Arc<dyn ItinerarioRepository>,
    pub folgas: Arc<dyn FolgaRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
}

impl Stores {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            escalas: Arc::new(PgEscalaRepository::new(pool.clone())),
            itinerarios: Arc::new(PgItinerarioRepository::new(pool.clone())),
            folgas: Arc::new(PgFolgaRepository::new(pool.clone())),
            dashboard: Arc::new(PgDashboardRepository::new(pool.clone())),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub escalas: Arc<dyn EscalaRepository>,
    pub itinerarios: Arc<dyn ItinerarioRepository>,
    pub folgas: Arc<dyn FolgaRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let stores = Stores::postgres(&pool);
        Self::with_stores(pool, config, stores)
    }

    pub fn with_stores(pool: PgPool, config: EnvironmentConfig, stores: Stores) -> Self {
        Self {
            pool,
            config,
            escalas: stores.escalas,
            itinerarios: stores.itinerarios,
            folgas: stores.folgas,
            dashboard: stores.dashboard,
        }
    }
}
