//! Modelos do painel do motorista
//!
//! Visão de um dia para o motorista: suas viagens na escala, viagens extras
//! e se está de folga.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::viagem_extra::ViagemExtra;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PainelQuery {
    pub data: Option<NaiveDate>,
}

/// Viagem da escala vista pelo motorista
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ViagemPainel {
    pub escala_id: Uuid,
    pub data_escala: NaiveDate,
    pub garagem_id: Uuid,
    pub cliente_id: Option<Uuid>,
    pub cliente_nome: Option<String>,
    pub linha_id: Option<Uuid>,
    pub linha_nome: Option<String>,
    pub turno: Option<String>,
    pub hora_inicio: NaiveTime,
    pub hora_fim: NaiveTime,
    pub hora_deslocamento: Option<NaiveTime>,
    pub duracao: String,
    pub tipo_veiculo: Option<String>,
    pub placa_veiculo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PainelMotorista {
    pub motorista_id: Uuid,
    pub nome: String,
    pub re: String,
    pub data: NaiveDate,
    pub dia_semana_texto: String,
    pub em_folga: bool,
    pub viagens: Vec<ViagemPainel>,
    pub viagens_extras: Vec<ViagemExtra>,
}
