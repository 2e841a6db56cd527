mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::test_app;

#[tokio::test]
async fn test_segunda_folga_no_mesmo_dia_conflita() {
    let app = test_app();
    let motorista = Uuid::new_v4();

    let (status, body) = app
        .post(
            "/folgas",
            json!({ "motorista_id": motorista, "data_folga": "2024-06-10", "motivo": " Consulta " }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["motivo"], "Consulta");

    let (status, body) = app
        .post("/folgas", json!({ "motorista_id": motorista, "data_folga": "2024-06-10" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Motorista já possui folga nesta data");
}

#[tokio::test]
async fn test_outra_data_ou_outro_motorista_aceitos() {
    let app = test_app();
    let motorista = Uuid::new_v4();

    for (m, data) in [
        (motorista, "2024-06-10"),
        (motorista, "2024-06-11"),
        (Uuid::new_v4(), "2024-06-10"),
    ] {
        let (status, _) = app
            .post("/folgas", json!({ "motorista_id": m, "data_folga": data }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, lista) = app.get(&format!("/folgas?motorista_id={}", motorista)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lista.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_atualizar_para_data_ocupada_conflita() {
    let app = test_app();
    let motorista = Uuid::new_v4();

    app.post("/folgas", json!({ "motorista_id": motorista, "data_folga": "2024-06-10" }))
        .await;
    let (_, segunda) = app
        .post("/folgas", json!({ "motorista_id": motorista, "data_folga": "2024-06-12" }))
        .await;
    let id = segunda["data"]["id"].as_str().unwrap();

    let (status, _) = app
        .put(
            &format!("/folgas/{}", id),
            json!({ "motorista_id": motorista, "data_folga": "2024-06-10" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Regravar a própria data não é conflito
    let (status, body) = app
        .put(
            &format!("/folgas/{}", id),
            json!({ "motorista_id": motorista, "data_folga": "2024-06-12", "motivo": "Banco de horas" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["motivo"], "Banco de horas");
}

#[tokio::test]
async fn test_excluir_libera_a_data() {
    let app = test_app();
    let motorista = Uuid::new_v4();
    let corpo = json!({ "motorista_id": motorista, "data_folga": "2024-06-10" });

    let (_, criada) = app.post("/folgas", corpo.clone()).await;
    let id = criada["data"]["id"].as_str().unwrap();

    let (status, _) = app.delete(&format!("/folgas/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.post("/folgas", corpo).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.get(&format!("/folgas/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_motorista_invalido_no_corpo() {
    let app = test_app();
    let (status, body) = app
        .post("/folgas", json!({ "motorista_id": "123", "data_folga": "2024-06-10" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
