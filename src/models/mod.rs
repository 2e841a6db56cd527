//! Modelos do sistema
//!
//! Structs que mapeiam as tabelas PostgreSQL e os payloads da API.

pub mod cliente;
pub mod dashboard;
pub mod escala;
pub mod folga;
pub mod garagem;
pub mod itinerario;
pub mod linha;
pub mod motorista;
pub mod painel;
pub mod usuario;
pub mod veiculo;
pub mod viagem_extra;
