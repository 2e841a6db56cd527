//! Configuração do projeto
//!
//! Banco de dados e variáveis de ambiente do servidor.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
