//! Middleware do sistema
//!
//! Identidade da requisição, restrição de rotas administrativas e CORS.

pub mod auth;
pub mod cors;

pub use auth::{admin_only_middleware, UsuarioRequisicao};
pub use cors::cors_layer;
