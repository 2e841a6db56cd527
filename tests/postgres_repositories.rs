//! Repositórios Postgres contra um banco real
//!
//! Ignorados por padrão. Para rodar:
//! `DATABASE_URL=postgres://... cargo test --test postgres_repositories -- --ignored`
//! As migrações são aplicadas no início e cada teste usa ids próprios.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use escala_frota::models::escala::{NovaEscala, NovaEscalaViagem};
use escala_frota::models::folga::NovaFolga;
use escala_frota::models::itinerario::{NovaParada, NovoItinerario};
use escala_frota::repositories::folga_repository::FOLGA_DUPLICADA;
use escala_frota::repositories::{
    EscalaRepository, FolgaRepository, ItinerarioRepository, PgEscalaRepository,
    PgFolgaRepository, PgItinerarioRepository,
};
use escala_frota::utils::errors::AppError;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL para os testes de banco");
    let pool = PgPool::connect(&url).await.expect("conexão com o banco de teste");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrações aplicadas");
    pool
}

async fn nova_garagem(pool: &PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO garagens (id, nome) VALUES ($1, $2)")
        .bind(id)
        .bind(format!("Garagem {}", id))
        .execute(pool)
        .await
        .unwrap();
    id
}

async fn novo_motorista(pool: &PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO motoristas (id, nome, re) VALUES ($1, $2, $3)")
        .bind(id)
        .bind("Motorista de teste")
        .bind(id.to_string())
        .execute(pool)
        .await
        .unwrap();
    id
}

async fn novo_cliente_com_linha(pool: &PgPool) -> (Uuid, Uuid) {
    let cliente = Uuid::new_v4();
    let linha = Uuid::new_v4();
    sqlx::query("INSERT INTO clientes (id, nome) VALUES ($1, 'Metalúrgica Alfa')")
        .bind(cliente)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO linhas (id, cliente_id, nome) VALUES ($1, $2, 'Centro')")
        .bind(linha)
        .bind(cliente)
        .execute(pool)
        .await
        .unwrap();
    (cliente, linha)
}

fn hora(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

fn data(dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, dia).unwrap()
}

fn viagem(motorista: Uuid, inicio: u32, fim: u32) -> NovaEscalaViagem {
    NovaEscalaViagem {
        motorista_id: Some(motorista),
        motorista_nome_snapshot: Some("Motorista de teste".to_string()),
        motorista_re_snapshot: Some(motorista.to_string()),
        cliente_id: None,
        linha_id: None,
        garagem_id: None,
        turno: Some("MANHA".to_string()),
        hora_inicio: hora(inicio),
        hora_fim: hora(fim),
        hora_deslocamento: None,
        duracao: format!("{:02}:00", fim - inicio),
        tipo_veiculo: None,
        placa_veiculo: None,
    }
}

fn escala(garagem: Uuid) -> NovaEscala {
    NovaEscala {
        data_escala: data(10),
        garagem_id: garagem,
        dia_semana_texto: "Segunda-feira".to_string(),
        criado_por: None,
    }
}

fn parada(ordem: i32, referencia: &str) -> NovaParada {
    NovaParada {
        ordem,
        posicao: ordem,
        horario: Some(hora(6)),
        referencia: Some(referencia.to_string()),
        bairro: None,
        endereco: None,
    }
}

#[tokio::test]
#[ignore = "requer DATABASE_URL"]
async fn test_falha_ao_regravar_viagens_preserva_escala_anterior() {
    let pool = pool().await;
    let repo = PgEscalaRepository::new(pool.clone());
    let garagem = nova_garagem(&pool).await;
    let motorista = novo_motorista(&pool).await;

    let criada = repo
        .criar(escala(garagem), vec![viagem(motorista, 8, 12), viagem(motorista, 14, 18)])
        .await
        .unwrap();

    // Segunda viagem aponta para uma linha inexistente
    let mut quebrada = viagem(motorista, 6, 7);
    quebrada.linha_id = Some(Uuid::new_v4());
    let mut nova = escala(garagem);
    nova.data_escala = data(11);

    let resultado = repo
        .substituir(criada.escala.id, nova, vec![viagem(motorista, 5, 6), quebrada])
        .await;
    assert!(matches!(resultado, Err(AppError::BadRequest(_))));

    let lida = repo.buscar(criada.escala.id).await.unwrap().unwrap();
    assert_eq!(lida.escala.data_escala, data(10));
    let ids: Vec<Uuid> = lida.viagens.iter().map(|v| v.id).collect();
    let ids_originais: Vec<Uuid> = criada.viagens.iter().map(|v| v.id).collect();
    assert_eq!(ids, ids_originais);
    assert_eq!(lida.viagens[0].hora_inicio, hora(8));
}

#[tokio::test]
#[ignore = "requer DATABASE_URL"]
async fn test_excluir_escala_remove_viagens_no_banco() {
    let pool = pool().await;
    let repo = PgEscalaRepository::new(pool.clone());
    let garagem = nova_garagem(&pool).await;
    let motorista = novo_motorista(&pool).await;

    let criada = repo
        .criar(escala(garagem), vec![viagem(motorista, 8, 12)])
        .await
        .unwrap();
    assert!(repo.excluir(criada.escala.id).await.unwrap());

    let restantes: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM escala_viagens WHERE escala_id = $1")
            .bind(criada.escala.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(restantes, 0);
}

#[tokio::test]
#[ignore = "requer DATABASE_URL"]
async fn test_falha_ao_regravar_filhos_preserva_itinerario() {
    let pool = pool().await;
    let repo = PgItinerarioRepository::new(pool.clone());
    let garagem = nova_garagem(&pool).await;
    let (cliente, linha) = novo_cliente_com_linha(&pool).await;

    let novo = NovoItinerario {
        cliente_id: cliente,
        linha_id: linha,
        garagem_id: garagem,
        turno: "MANHA".to_string(),
        cliente_nome_snapshot: "Metalúrgica Alfa".to_string(),
        linha_nome_snapshot: "Centro".to_string(),
        atualizado_em: data(10),
    };
    let salvo = repo
        .salvar(novo.clone(), vec![1, 3], vec![parada(1, "Praça"), parada(2, "Escola")])
        .await
        .unwrap();

    // Dia 9 viola a CHECK de itinerarios_dias depois que os filhos já foram apagados
    let mut alterado = novo.clone();
    alterado.atualizado_em = data(20);

    let resultado = repo
        .substituir(salvo.itinerario.id, alterado.clone(), vec![2, 9], vec![parada(1, "Nova")])
        .await;
    assert!(matches!(resultado, Err(AppError::BadRequest(_))));

    let resultado = repo.salvar(alterado, vec![9], vec![]).await;
    assert!(matches!(resultado, Err(AppError::BadRequest(_))));

    let lido = repo.buscar(salvo.itinerario.id).await.unwrap().unwrap();
    assert_eq!(lido.itinerario.atualizado_em, data(10));
    assert_eq!(lido.dias, vec![1, 3]);
    let referencias: Vec<&str> = lido
        .paradas
        .iter()
        .filter_map(|p| p.referencia.as_deref())
        .collect();
    assert_eq!(referencias, vec!["Praça", "Escola"]);
}

#[tokio::test]
#[ignore = "requer DATABASE_URL"]
async fn test_folga_repetida_vira_conflito_no_banco() {
    let pool = pool().await;
    let repo = PgFolgaRepository::new(pool.clone());
    let motorista = novo_motorista(&pool).await;

    let folga = |dia| NovaFolga {
        motorista_id: motorista,
        data_folga: data(dia),
        motivo: None,
    };

    repo.criar(folga(10)).await.unwrap();
    let outra = repo.criar(folga(11)).await.unwrap();

    match repo.criar(folga(10)).await {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, FOLGA_DUPLICADA),
        outro => panic!("esperado conflito, veio {:?}", outro),
    }

    match repo.atualizar(outra.id, folga(10)).await {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, FOLGA_DUPLICADA),
        outro => panic!("esperado conflito, veio {:?}", outro),
    }

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folgas WHERE motorista_id = $1")
        .bind(motorista)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 2);
}
