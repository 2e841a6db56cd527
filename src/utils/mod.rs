//! Utilitários do sistema
//!
//! Tratamento de erros, validação e extratores comuns.

pub mod errors;
pub mod extract;
pub mod validation;
