mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

use common::test_app;
use escala_frota::models::dashboard::RegistroMovimento;

fn registro(data: &str, garagem: Option<Uuid>, cliente: Option<Uuid>) -> RegistroMovimento {
    RegistroMovimento {
        data: data.parse::<NaiveDate>().unwrap(),
        garagem_id: garagem,
        cliente_id: cliente,
    }
}

fn soma(baldes: &Value, campo: &str) -> u64 {
    baldes
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b[campo].as_u64().unwrap())
        .sum()
}

#[tokio::test]
async fn test_totais_batem_com_os_baldes() {
    let app = test_app();
    let garagem = Some(Uuid::new_v4());
    let cliente = Some(Uuid::new_v4());

    *app.dashboard.fixas.lock().unwrap() = vec![
        registro("2024-06-10", garagem, cliente),
        registro("2024-06-10", garagem, None),
        registro("2024-06-11", None, cliente),
        registro("2024-07-02", garagem, cliente),
        // fora do período
        registro("2024-08-01", garagem, cliente),
    ];
    *app.dashboard.extras.lock().unwrap() = vec![registro("2024-06-12", garagem, cliente)];
    *app.dashboard.itinerarios.lock().unwrap() = vec![registro("2024-07-01", garagem, None)];

    for agrupamento in ["dia", "mes"] {
        let (status, body) = app
            .get(&format!(
                "/dashboard/resumo?data_inicio=2024-06-01&data_fim=2024-07-31&agrupamento={}",
                agrupamento
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);

        for campo in ["viagens_fixas", "viagens_extras", "itinerarios_atualizados"] {
            assert_eq!(
                body["totais"][campo].as_u64().unwrap(),
                soma(&body["por_periodo"], campo),
                "{} por {}",
                campo,
                agrupamento
            );
        }
        assert_eq!(body["totais"]["viagens_fixas"], 4);
        assert_eq!(body["totais"]["viagens_extras"], 1);
        assert_eq!(body["totais"]["itinerarios_atualizados"], 1);
    }

    let (_, por_mes) = app
        .get("/dashboard/resumo?data_inicio=2024-06-01&data_fim=2024-07-31&agrupamento=mes")
        .await;
    assert_eq!(por_mes["por_periodo"].as_array().unwrap().len(), 2);
    assert_eq!(por_mes["por_periodo"][0]["periodo"], "2024-06");
}

#[tokio::test]
async fn test_fatias_por_garagem_e_cliente() {
    let app = test_app();
    let garagem = Uuid::new_v4();
    *app.dashboard.fixas.lock().unwrap() = vec![
        registro("2024-06-10", Some(garagem), None),
        registro("2024-06-10", Some(Uuid::new_v4()), None),
    ];

    let (status, body) = app
        .get(&format!(
            "/dashboard/por-garagem?data_inicio=2024-06-01&data_fim=2024-06-30&garagem_id={}",
            garagem
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let baldes = body.as_array().unwrap();
    assert_eq!(baldes.len(), 1);
    assert_eq!(baldes[0]["id"], garagem.to_string());
    assert_eq!(baldes[0]["viagens_fixas"], 1);

    let (status, body) = app
        .get("/dashboard/por-cliente?data_inicio=2024-06-01&data_fim=2024-06-30")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], Value::Null);
    assert_eq!(body[0]["viagens_fixas"], 2);
}

#[tokio::test]
async fn test_periodo_invertido() {
    let app = test_app();
    let (status, body) = app
        .get("/dashboard/resumo?data_inicio=2024-07-01&data_fim=2024-06-01")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_parametro_obrigatorio_ausente() {
    let app = test_app();
    let (status, body) = app.get("/dashboard/resumo?data_fim=2024-06-10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("data_inicio"));

    let (status, body) = app
        .get("/dashboard/resumo?data_inicio=2024-06-01&data_fim=2024-06-10&agrupamento=ano")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
