//! Escala de frota
//!
//! API de back-office para escalas diárias de motoristas, itinerários de
//! linhas fretadas, folgas, viagens extras e o dashboard operacional.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::{AppState, Stores};
