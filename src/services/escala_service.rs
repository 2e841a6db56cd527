//! Regras da escala
//!
//! Montagem das viagens a gravar (snapshot do motorista, duração) e
//! preparação da cópia de uma escala existente. Tudo aqui é puro; a
//! gravação fica no repositório.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::escala::{
    DuplicarEscalaRequest, EscalaDetalhe, EscalaViagemInput, NovaEscala, NovaEscalaViagem,
};
use crate::models::motorista::MotoristaSnapshot;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::normalizar_placa;

const MINUTOS_POR_DIA: i64 = 24 * 60;

/// Nome do dia da semana em português
pub fn dia_semana_texto(data: NaiveDate) -> String {
    match data.weekday() {
        Weekday::Sun => "Domingo",
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
    }
    .to_string()
}

/// Duração `HH:MM` entre início e fim; fim anterior ao início vira o dia
pub fn calcular_duracao(inicio: NaiveTime, fim: NaiveTime) -> String {
    let mut minutos = (fim - inicio).num_minutes();
    if minutos < 0 {
        minutos += MINUTOS_POR_DIA;
    }
    format!("{:02}:{:02}", minutos / 60, minutos % 60)
}

/// Cabeçalho a gravar para uma data/garagem
pub fn nova_escala(data_escala: NaiveDate, garagem_id: Uuid, criado_por: Option<Uuid>) -> NovaEscala {
    NovaEscala {
        data_escala,
        garagem_id,
        dia_semana_texto: dia_semana_texto(data_escala),
        criado_por,
    }
}

/// Ids de motorista distintos citados nas viagens, na ordem de aparição
pub fn motoristas_citados(viagens: &[EscalaViagemInput]) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = Vec::new();
    for id in viagens.iter().filter_map(|v| v.motorista_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Converte as viagens recebidas em registros prontos para gravação.
///
/// O nome e o RE do motorista são copiados do cadastro atual; um motorista
/// inexistente invalida o payload inteiro.
pub fn preparar_viagens(
    viagens: Vec<EscalaViagemInput>,
    snapshots: &[MotoristaSnapshot],
) -> AppResult<Vec<NovaEscalaViagem>> {
    let por_id: HashMap<Uuid, &MotoristaSnapshot> =
        snapshots.iter().map(|s| (s.id, s)).collect();

    viagens
        .into_iter()
        .enumerate()
        .map(|(indice, viagem)| {
            let snapshot = match viagem.motorista_id {
                Some(id) => Some(por_id.get(&id).ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Viagem {}: motorista '{}' não encontrado",
                        indice + 1,
                        id
                    ))
                })?),
                None => None,
            };

            Ok(NovaEscalaViagem {
                motorista_id: viagem.motorista_id,
                motorista_nome_snapshot: snapshot.map(|s| s.nome.clone()),
                motorista_re_snapshot: snapshot.map(|s| s.re.clone()),
                cliente_id: viagem.cliente_id,
                linha_id: viagem.linha_id,
                garagem_id: viagem.garagem_id,
                turno: viagem.turno,
                duracao: calcular_duracao(viagem.hora_inicio, viagem.hora_fim),
                hora_inicio: viagem.hora_inicio,
                hora_fim: viagem.hora_fim,
                hora_deslocamento: viagem.hora_deslocamento,
                tipo_veiculo: viagem.tipo_veiculo,
                placa_veiculo: viagem.placa_veiculo.as_deref().map(normalizar_placa),
            })
        })
        .collect()
}

/// Prepara a cópia de uma escala.
///
/// As viagens são copiadas como estão (inclusive os snapshots); só o
/// cabeçalho muda: novo autor e, se pedido, nova data ou garagem.
pub fn preparar_duplicacao(
    original: &EscalaDetalhe,
    overrides: &DuplicarEscalaRequest,
    usuario: Option<Uuid>,
) -> (NovaEscala, Vec<NovaEscalaViagem>) {
    let data = overrides.data_escala.unwrap_or(original.escala.data_escala);
    let garagem = overrides.garagem_id.unwrap_or(original.escala.garagem_id);

    let viagens = original.viagens.iter().map(NovaEscalaViagem::from).collect();
    (nova_escala(data, garagem, usuario), viagens)
}
