//! Módulo de banco de dados
//!
//! Conexão e migrações do PostgreSQL

pub mod connection;

pub use connection::DatabaseConnection;
