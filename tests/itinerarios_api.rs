mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{test_app, TestApp};

struct Cenario {
    app: TestApp,
    cliente: Uuid,
    linha: Uuid,
    garagem: Uuid,
}

fn cenario() -> Cenario {
    let app = test_app();
    let cliente = app.itinerarios.cadastrar_cliente("Metalúrgica Alfa");
    let linha = app
        .itinerarios
        .cadastrar_linha(cliente, "Centro - Distrito Industrial");
    Cenario {
        app,
        cliente,
        linha,
        garagem: Uuid::new_v4(),
    }
}

fn corpo(c: &Cenario, turno: &str, dias: Value, paradas: Value) -> Value {
    json!({
        "cliente_id": c.cliente,
        "linha_id": c.linha,
        "garagem_id": c.garagem,
        "turno": turno,
        "dias": dias,
        "paradas": paradas
    })
}

fn parada(ordem: i32, referencia: &str) -> Value {
    json!({ "ordem": ordem, "horario": "05:40:00", "referencia": referencia, "bairro": "Centro" })
}

#[tokio::test]
async fn test_salvar_itinerario_com_snapshot_dos_nomes() {
    let c = cenario();
    let (status, body) = c
        .app
        .post(
            "/itinerarios",
            corpo(&c, "manha", json!([5, 1, 3, 1]), json!([parada(1, "Praça"), parada(2, "Escola")])),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let dados = &body["data"];
    assert_eq!(dados["turno"], "MANHA");
    assert_eq!(dados["cliente_nome_snapshot"], "Metalúrgica Alfa");
    assert_eq!(dados["linha_nome_snapshot"], "Centro - Distrito Industrial");
    assert_eq!(dados["dias"], json!([1, 3, 5]));
    assert_eq!(dados["paradas"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_mesma_chave_atualiza_em_vez_de_duplicar() {
    let c = cenario();
    let (_, primeiro) = c
        .app
        .post("/itinerarios", corpo(&c, "MANHA", json!([1]), json!([parada(1, "Praça")])))
        .await;
    let (status, segundo) = c
        .app
        .post(
            "/itinerarios",
            corpo(&c, "manha", json!([2]), json!([parada(1, "Fábrica"), parada(2, "Portaria")])),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(primeiro["data"]["id"], segundo["data"]["id"]);
    assert_eq!(segundo["data"]["dias"], json!([2]));
    assert_eq!(segundo["data"]["paradas"][0]["referencia"], "Fábrica");
    assert_eq!(c.app.itinerarios.total_paradas(), 2);

    let (_, lista) = c.app.get("/itinerarios").await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_paradas_vazias_e_ordem_repetida() {
    let c = cenario();
    let (status, body) = c
        .app
        .post("/itinerarios", corpo(&c, "NOITE", json!([]), json!([])))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["paradas"].as_array().unwrap().is_empty());
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = c
        .app
        .put(
            &format!("/itinerarios/{}", id),
            corpo(
                &c,
                "NOITE",
                json!([]),
                json!([parada(2, "Último"), parada(1, "Primeiro"), parada(1, "Segundo")]),
            ),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let referencias: Vec<&str> = body["data"]["paradas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["referencia"].as_str().unwrap())
        .collect();
    assert_eq!(referencias, vec!["Primeiro", "Segundo", "Último"]);
}

#[tokio::test]
async fn test_linha_de_outro_cliente_rejeitada() {
    let c = cenario();
    let outro = c.app.itinerarios.cadastrar_cliente("Têxtil Beta");
    let mut payload = corpo(&c, "MANHA", json!([]), json!([]));
    payload["cliente_id"] = json!(outro);

    let (status, body) = c.app.post("/itinerarios", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A linha informada não pertence ao cliente");

    let mut payload = corpo(&c, "MANHA", json!([]), json!([]));
    payload["linha_id"] = json!(Uuid::new_v4());
    let (status, _) = c.app.post("/itinerarios", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dia_da_semana_invalido() {
    let c = cenario();
    let (status, _) = c
        .app
        .post("/itinerarios", corpo(&c, "MANHA", json!([7]), json!([])))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_excluir_remove_paradas() {
    let c = cenario();
    let (_, body) = c
        .app
        .post(
            "/itinerarios",
            corpo(&c, "TARDE", json!([1, 2]), json!([parada(1, "A"), parada(2, "B")])),
        )
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(c.app.itinerarios.total_paradas(), 2);

    let (status, _) = c.app.delete(&format!("/itinerarios/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(c.app.itinerarios.total_paradas(), 0);

    let (status, _) = c.app.get(&format!("/itinerarios/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_turno_em_branco_rejeitado() {
    let c = cenario();
    let (status, body) = c
        .app
        .post("/itinerarios", corpo(&c, "   ", json!([]), json!([])))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(c.app.get("/itinerarios").await.1.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_corpo_sem_linha_e_400() {
    let c = cenario();
    let (status, body) = c
        .app
        .post(
            "/itinerarios",
            json!({ "cliente_id": c.cliente, "garagem_id": c.garagem, "turno": "MANHA" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
