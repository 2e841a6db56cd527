//! Montagem do painel do motorista

use chrono::NaiveDate;

use crate::models::motorista::MotoristaSnapshot;
use crate::models::painel::{PainelMotorista, ViagemPainel};
use crate::models::viagem_extra::ViagemExtra;
use crate::services::escala_service::dia_semana_texto;

pub fn montar_painel(
    motorista: MotoristaSnapshot,
    data: NaiveDate,
    em_folga: bool,
    mut viagens: Vec<ViagemPainel>,
    mut viagens_extras: Vec<ViagemExtra>,
) -> PainelMotorista {
    viagens.sort_by_key(|v| v.hora_inicio);
    // Extras sem horário vão para o fim
    viagens_extras.sort_by_key(|v| (v.hora_inicio.is_none(), v.hora_inicio));

    PainelMotorista {
        motorista_id: motorista.id,
        nome: motorista.nome,
        re: motorista.re,
        data,
        dia_semana_texto: dia_semana_texto(data),
        em_folga,
        viagens,
        viagens_extras,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};
    use uuid::Uuid;

    fn viagem(h: u32) -> ViagemPainel {
        ViagemPainel {
            escala_id: Uuid::new_v4(),
            data_escala: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            garagem_id: Uuid::new_v4(),
            cliente_id: None,
            cliente_nome: None,
            linha_id: None,
            linha_nome: None,
            turno: None,
            hora_inicio: NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
            hora_fim: NaiveTime::from_hms_opt(h + 1, 0, 0).unwrap(),
            hora_deslocamento: None,
            duracao: "01:00".to_string(),
            tipo_veiculo: None,
            placa_veiculo: None,
        }
    }

    fn extra(hora: Option<u32>) -> ViagemExtra {
        ViagemExtra {
            id: Uuid::new_v4(),
            data_viagem: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            garagem_id: None,
            cliente_id: None,
            linha_id: None,
            motorista_id: None,
            veiculo_id: None,
            descricao: None,
            solicitante: None,
            hora_inicio: hora.map(|h| NaiveTime::from_hms_opt(h, 0, 0).unwrap()),
            hora_fim: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_painel_ordena_viagens_por_horario() {
        let motorista = MotoristaSnapshot {
            id: Uuid::new_v4(),
            nome: "Ana".to_string(),
            re: "55".to_string(),
        };
        let data = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let painel = montar_painel(
            motorista,
            data,
            false,
            vec![viagem(14), viagem(6), viagem(9)],
            vec![extra(None), extra(Some(20)), extra(Some(5))],
        );

        let horas: Vec<String> = painel.viagens.iter().map(|v| v.hora_inicio.format("%H").to_string()).collect();
        assert_eq!(horas, vec!["06", "09", "14"]);
        assert!(painel.viagens_extras[2].hora_inicio.is_none());
        assert_eq!(painel.viagens_extras[0].hora_inicio, NaiveTime::from_hms_opt(5, 0, 0));
        assert_eq!(painel.dia_semana_texto, "Segunda-feira");
        assert!(!painel.em_folga);
    }
}
