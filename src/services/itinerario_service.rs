//! Regras do itinerário
//!
//! Normaliza dias e paradas antes da gravação e monta o cabeçalho com o
//! snapshot dos nomes de cliente e linha.

use chrono::NaiveDate;

use crate::models::itinerario::{
    ClienteLinhaNomes, NovaParada, NovoItinerario, ParadaInput, SalvarItinerarioRequest,
};
use crate::utils::errors::{AppError, AppResult};

/// Dias válidos (0..=6), ordenados e sem repetição
pub fn normalizar_dias(dias: &[i16]) -> AppResult<Vec<i16>> {
    if let Some(invalido) = dias.iter().find(|d| !(0..=6).contains(*d)) {
        return Err(AppError::BadRequest(format!(
            "Dia da semana inválido: {} (use 0 = domingo a 6 = sábado)",
            invalido
        )));
    }
    let mut normalizados = dias.to_vec();
    normalizados.sort_unstable();
    normalizados.dedup();
    Ok(normalizados)
}

/// Paradas na ordem recebida; `ordem` repetida é aceita e o empate segue
/// a posição de envio
pub fn preparar_paradas(paradas: Vec<ParadaInput>) -> Vec<NovaParada> {
    paradas
        .into_iter()
        .enumerate()
        .map(|(posicao, parada)| NovaParada {
            ordem: parada.ordem,
            posicao: posicao as i32,
            horario: parada.horario,
            referencia: limpar(parada.referencia),
            bairro: limpar(parada.bairro),
            endereco: limpar(parada.endereco),
        })
        .collect()
}

/// Cabeçalho do itinerário com os nomes congelados
pub fn novo_itinerario(
    request: &SalvarItinerarioRequest,
    nomes: &ClienteLinhaNomes,
    hoje: NaiveDate,
) -> AppResult<NovoItinerario> {
    if nomes.linha_cliente_id != request.cliente_id {
        return Err(AppError::BadRequest(
            "A linha informada não pertence ao cliente".to_string(),
        ));
    }

    Ok(NovoItinerario {
        cliente_id: request.cliente_id,
        linha_id: request.linha_id,
        garagem_id: request.garagem_id,
        turno: request.turno.trim().to_uppercase(),
        cliente_nome_snapshot: nomes.cliente_nome.clone(),
        linha_nome_snapshot: nomes.linha_nome.clone(),
        atualizado_em: hoje,
    })
}

fn limpar(valor: Option<String>) -> Option<String> {
    valor.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
