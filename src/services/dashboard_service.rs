//! Serviço do dashboard
//!
//! Busca as três fontes em paralelo e agrupa em memória. Os totais são
//! sempre a soma dos baldes de período.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::models::dashboard::{
    Agrupamento, BaldeChave, BaldePeriodo, Contagens, DashboardFiltros, DashboardResumo,
    RegistroMovimento,
};
use crate::repositories::dashboard_repository::DashboardRepository;
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone, Copy)]
enum Fonte {
    Fixa,
    Extra,
    Itinerario,
}

impl Contagens {
    fn somar(&mut self, fonte: Fonte) {
        match fonte {
            Fonte::Fixa => self.viagens_fixas += 1,
            Fonte::Extra => self.viagens_extras += 1,
            Fonte::Itinerario => self.itinerarios_atualizados += 1,
        }
    }
}

pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn resumo(&self, filtros: &DashboardFiltros) -> AppResult<DashboardResumo> {
        if filtros.data_inicio > filtros.data_fim {
            return Err(AppError::BadRequest(format!(
                "Período inválido: data_inicio ({}) posterior a data_fim ({})",
                filtros.data_inicio, filtros.data_fim
            )));
        }

        let (fixas, extras, itinerarios) = tokio::try_join!(
            self.repository.viagens_fixas(filtros),
            self.repository.viagens_extras(filtros),
            self.repository.itinerarios_atualizados(filtros),
        )?;

        debug!(
            "📊 Dashboard: {} fixas, {} extras, {} itinerários",
            fixas.len(),
            extras.len(),
            itinerarios.len()
        );

        Ok(agregar(filtros, &fixas, &extras, &itinerarios))
    }
}

/// Chave do balde de período
pub fn chave_periodo(data: NaiveDate, agrupamento: Agrupamento) -> String {
    match agrupamento {
        Agrupamento::Dia => data.format("%Y-%m-%d").to_string(),
        Agrupamento::Mes => data.format("%Y-%m").to_string(),
    }
}

/// Agrupa os registros por período, garagem e cliente.
///
/// Registros fora do período ou de outra garagem (quando filtrada) são
/// descartados aqui também, para que os totais batam com os baldes.
pub fn agregar(
    filtros: &DashboardFiltros,
    fixas: &[RegistroMovimento],
    extras: &[RegistroMovimento],
    itinerarios: &[RegistroMovimento],
) -> DashboardResumo {
    let mut totais = Contagens::default();
    let mut por_periodo: BTreeMap<String, Contagens> = BTreeMap::new();
    let mut por_garagem: BTreeMap<Option<Uuid>, Contagens> = BTreeMap::new();
    let mut por_cliente: BTreeMap<Option<Uuid>, Contagens> = BTreeMap::new();

    let fontes = [
        (Fonte::Fixa, fixas),
        (Fonte::Extra, extras),
        (Fonte::Itinerario, itinerarios),
    ];

    for (fonte, registros) in fontes {
        for registro in registros.iter().filter(|r| dentro_do_filtro(filtros, r)) {
            totais.somar(fonte);
            por_periodo
                .entry(chave_periodo(registro.data, filtros.agrupamento))
                .or_default()
                .somar(fonte);
            por_garagem.entry(registro.garagem_id).or_default().somar(fonte);
            por_cliente.entry(registro.cliente_id).or_default().somar(fonte);
        }
    }

    DashboardResumo {
        data_inicio: filtros.data_inicio,
        data_fim: filtros.data_fim,
        garagem_id: filtros.garagem_id,
        agrupamento: filtros.agrupamento,
        totais,
        por_periodo: por_periodo
            .into_iter()
            .map(|(periodo, contagens)| BaldePeriodo { periodo, contagens })
            .collect(),
        por_garagem: por_garagem
            .into_iter()
            .map(|(id, contagens)| BaldeChave { id, contagens })
            .collect(),
        por_cliente: por_cliente
            .into_iter()
            .map(|(id, contagens)| BaldeChave { id, contagens })
            .collect(),
    }
}

fn dentro_do_filtro(filtros: &DashboardFiltros, registro: &RegistroMovimento) -> bool {
    registro.data >= filtros.data_inicio
        && registro.data <= filtros.data_fim
        && filtros
            .garagem_id
            .map_or(true, |garagem| registro.garagem_id == Some(garagem))
}
