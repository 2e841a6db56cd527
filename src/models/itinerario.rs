//! Modelo de Itinerário
//!
//! Um itinerário por (cliente, linha, garagem, turno). Dias da semana e
//! paradas são filhos regravados por inteiro a cada salvamento.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Cabeçalho do itinerário - tabela `itinerarios`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Itinerario {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub linha_id: Uuid,
    pub garagem_id: Uuid,
    pub turno: String,
    pub cliente_nome_snapshot: String,
    pub linha_nome_snapshot: String,
    pub atualizado_em: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Parada ordenada - tabela `itinerario_paradas`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItinerarioParada {
    pub id: Uuid,
    pub itinerario_id: Uuid,
    pub ordem: i32,
    pub horario: Option<NaiveTime>,
    pub referencia: Option<String>,
    pub bairro: Option<String>,
    pub endereco: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItinerarioDetalhe {
    #[serde(flatten)]
    pub itinerario: Itinerario,
    /// 0 = domingo ... 6 = sábado
    pub dias: Vec<i16>,
    pub paradas: Vec<ItinerarioParada>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SalvarItinerarioRequest {
    pub cliente_id: Uuid,
    pub linha_id: Uuid,
    pub garagem_id: Uuid,

    #[validate(length(max = 20), custom = "validate_not_blank")]
    pub turno: String,

    #[serde(default)]
    pub dias: Vec<i16>,

    #[serde(default)]
    #[validate]
    pub paradas: Vec<ParadaInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParadaInput {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(range(min = 0))]
    pub ordem: i32,

    pub horario: Option<NaiveTime>,

    #[validate(length(max = 150))]
    pub referencia: Option<String>,

    #[validate(length(max = 100))]
    pub bairro: Option<String>,

    #[validate(length(max = 255))]
    pub endereco: Option<String>,
}

/// Cabeçalho pronto para gravação
#[derive(Debug, Clone, PartialEq)]
pub struct NovoItinerario {
    pub cliente_id: Uuid,
    pub linha_id: Uuid,
    pub garagem_id: Uuid,
    pub turno: String,
    pub cliente_nome_snapshot: String,
    pub linha_nome_snapshot: String,
    pub atualizado_em: NaiveDate,
}

/// Parada pronta para gravação; `posicao` preserva a ordem de envio
#[derive(Debug, Clone, PartialEq)]
pub struct NovaParada {
    pub ordem: i32,
    pub posicao: i32,
    pub horario: Option<NaiveTime>,
    pub referencia: Option<String>,
    pub bairro: Option<String>,
    pub endereco: Option<String>,
}

/// Nomes do cliente e da linha para o snapshot
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClienteLinhaNomes {
    pub cliente_nome: String,
    pub linha_nome: String,
    pub linha_cliente_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItinerarioFiltros {
    pub cliente_id: Option<Uuid>,
    pub linha_id: Option<Uuid>,
    pub garagem_id: Option<Uuid>,
    pub turno: Option<String>,
}
