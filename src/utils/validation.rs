//! Utilitários de validação
//!
//! Funções auxiliares para validar identificadores, placas, roles e
//! períodos antes de qualquer ida ao banco.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::{AppError, AppResult};

lazy_static! {
    static ref UUID_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .expect("regex de UUID válida");

    // Padrão antigo (ABC-1234, hífen opcional) e Mercosul (ABC1D23, sem hífen)
    static ref PLACA_REGEX: Regex =
        Regex::new(r"^[A-Z]{3}(-?[0-9]{4}|[0-9][A-Z][0-9]{2})$").expect("regex de placa válida");

    static ref ROLE_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]{1,31}$").expect("regex de role válida");
}

/// Validar e converter string em UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    let trimmed = value.trim();
    if !UUID_REGEX.is_match(trimmed) {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Uuid::parse_str(trimmed).map_err(|_| ValidationError::new("uuid"))
}

/// Converter um identificador recebido na URL ou cabeçalho
pub fn parse_uuid(value: &str, campo: &str) -> AppResult<Uuid> {
    validate_uuid(value)
        .map_err(|_| AppError::BadRequest(format!("{} inválido: '{}'", campo, value)))
}

/// Validar placa de veículo (com ou sem hífen)
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    let normalizada = value.trim().to_uppercase();
    if !PLACA_REGEX.is_match(&normalizada) {
        let mut error = ValidationError::new("placa");
        error.message = Some("Placa fora do padrão (ABC-1234 ou ABC1D23)".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar placa para o formato gravado no banco
pub fn normalizar_placa(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar código de role (minúsculas, dígitos e sublinhado)
pub fn validate_role_codigo(value: &str) -> Result<(), ValidationError> {
    if !ROLE_REGEX.is_match(value) {
        let mut error = ValidationError::new("role");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que um texto não está vazio
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("Campo obrigatório".into());
        return Err(error);
    }
    Ok(())
}

/// Validar intervalo de datas opcional (início <= fim)
pub fn validate_periodo(inicio: Option<NaiveDate>, fim: Option<NaiveDate>) -> AppResult<()> {
    if let (Some(inicio), Some(fim)) = (inicio, fim) {
        if inicio > fim {
            return Err(AppError::BadRequest(format!(
                "Período inválido: data_inicio ({}) posterior a data_fim ({})",
                inicio, fim
            )));
        }
    }
    Ok(())
}
