//! Serviços de negócio
//!
//! Regras que não dependem do banco: montagem de escalas e itinerários,
//! agregação do dashboard e painel do motorista.

pub mod dashboard_service;
pub mod escala_service;
pub mod itinerario_service;
pub mod painel_service;
