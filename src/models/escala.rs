//! Modelo de Escala
//!
//! Uma escala é o plantão de uma garagem numa data. Suas viagens são
//! sempre regravadas por inteiro a cada salvamento: o identificador de uma
//! viagem não sobrevive entre dois saves.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_placa;

/// Cabeçalho da escala - tabela `escalas`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Escala {
    pub id: Uuid,
    pub data_escala: NaiveDate,
    pub garagem_id: Uuid,
    pub dia_semana_texto: String,
    pub criado_por: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Viagem (perna) da escala - tabela `escala_viagens`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EscalaViagem {
    pub id: Uuid,
    pub escala_id: Uuid,
    pub ordem: i32,
    pub motorista_id: Option<Uuid>,
    pub motorista_nome_snapshot: Option<String>,
    pub motorista_re_snapshot: Option<String>,
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub garagem_id: Option<Uuid>,
    pub turno: Option<String>,
    pub hora_inicio: NaiveTime,
    pub hora_fim: NaiveTime,
    pub hora_deslocamento: Option<NaiveTime>,
    pub duracao: String,
    pub tipo_veiculo: Option<String>,
    pub placa_veiculo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Escala com suas viagens
#[derive(Debug, Clone, Serialize)]
pub struct EscalaDetalhe {
    #[serde(flatten)]
    pub escala: Escala,
    pub viagens: Vec<EscalaViagem>,
}

/// Linha da listagem de escalas
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EscalaResumo {
    pub id: Uuid,
    pub data_escala: NaiveDate,
    pub garagem_id: Uuid,
    pub dia_semana_texto: String,
    pub criado_por: Option<Uuid>,
    pub total_viagens: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload de criação/atualização de escala
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SalvarEscalaRequest {
    pub data_escala: NaiveDate,
    pub garagem_id: Uuid,
    #[serde(default)]
    #[validate]
    pub viagens: Vec<EscalaViagemInput>,
}

/// Viagem enviada pelo cliente; `id` é transitório e ignorado
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EscalaViagemInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub garagem_id: Option<Uuid>,

    #[validate(length(min = 1, max = 20))]
    pub turno: Option<String>,

    pub hora_inicio: NaiveTime,
    pub hora_fim: NaiveTime,
    pub hora_deslocamento: Option<NaiveTime>,

    #[validate(length(min = 2, max = 50))]
    pub tipo_veiculo: Option<String>,

    #[validate(custom = "validate_placa")]
    pub placa_veiculo: Option<String>,
}

/// Overrides opcionais da cópia
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuplicarEscalaRequest {
    pub data_escala: Option<NaiveDate>,
    pub garagem_id: Option<Uuid>,
}

/// Cabeçalho pronto para gravação
#[derive(Debug, Clone, PartialEq)]
pub struct NovaEscala {
    pub data_escala: NaiveDate,
    pub garagem_id: Uuid,
    pub dia_semana_texto: String,
    pub criado_por: Option<Uuid>,
}

/// Viagem pronta para gravação, com snapshot e duração já resolvidos
#[derive(Debug, Clone, PartialEq)]
pub struct NovaEscalaViagem {
    pub motorista_id: Option<Uuid>,
    pub motorista_nome_snapshot: Option<String>,
    pub motorista_re_snapshot: Option<String>,
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub garagem_id: Option<Uuid>,
    pub turno: Option<String>,
    pub hora_inicio: NaiveTime,
    pub hora_fim: NaiveTime,
    pub hora_deslocamento: Option<NaiveTime>,
    pub duracao: String,
    pub tipo_veiculo: Option<String>,
    pub placa_veiculo: Option<String>,
}

impl From<&EscalaViagem> for NovaEscalaViagem {
    fn from(viagem: &EscalaViagem) -> Self {
        Self {
            motorista_id: viagem.motorista_id,
            motorista_nome_snapshot: viagem.motorista_nome_snapshot.clone(),
            motorista_re_snapshot: viagem.motorista_re_snapshot.clone(),
            cliente_id: viagem.cliente_id,
            linha_id: viagem.linha_id,
            garagem_id: viagem.garagem_id,
            turno: viagem.turno.clone(),
            hora_inicio: viagem.hora_inicio,
            hora_fim: viagem.hora_fim,
            hora_deslocamento: viagem.hora_deslocamento,
            duracao: viagem.duracao.clone(),
            tipo_veiculo: viagem.tipo_veiculo.clone(),
            placa_veiculo: viagem.placa_veiculo.clone(),
        }
    }
}

/// Filtros da listagem
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EscalaFiltros {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub garagem_id: Option<Uuid>,
}
