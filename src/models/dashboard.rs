//! Modelos do dashboard
//!
//! Contagens de viagens fixas, viagens extras e atualizações de itinerário
//! num período, agrupadas por dia/mês, garagem e cliente.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Granularidade dos baldes de período
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agrupamento {
    #[default]
    Dia,
    Mes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardFiltros {
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub garagem_id: Option<Uuid>,
    #[serde(default)]
    pub agrupamento: Agrupamento,
}

/// Uma ocorrência contável (viagem ou atualização) com suas chaves
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RegistroMovimento {
    pub data: NaiveDate,
    pub garagem_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Contagens {
    pub viagens_fixas: u64,
    pub viagens_extras: u64,
    pub itinerarios_atualizados: u64,
}

impl Contagens {
    pub fn total(&self) -> u64 {
        self.viagens_fixas + self.viagens_extras + self.itinerarios_atualizados
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BaldePeriodo {
    /// `YYYY-MM-DD` por dia, `YYYY-MM` por mês
    pub periodo: String,
    #[serde(flatten)]
    pub contagens: Contagens,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaldeChave {
    /// `None` agrupa registros sem garagem/cliente
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub contagens: Contagens,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResumo {
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub garagem_id: Option<Uuid>,
    pub agrupamento: Agrupamento,
    pub totais: Contagens,
    pub por_periodo: Vec<BaldePeriodo>,
    pub por_garagem: Vec<BaldeChave>,
    pub por_cliente: Vec<BaldeChave>,
}
