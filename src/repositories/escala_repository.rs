use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::models::escala::{
    Escala, EscalaDetalhe, EscalaFiltros, EscalaResumo, EscalaViagem, NovaEscala,
    NovaEscalaViagem,
};
use crate::models::motorista::MotoristaSnapshot;
use crate::utils::errors::AppResult;

const ESCALA_COLUMNS: &str =
    "id, data_escala, garagem_id, dia_semana_texto, criado_por, created_at, updated_at";

const VIAGEM_COLUMNS: &str = "id, escala_id, ordem, motorista_id, motorista_nome_snapshot, \
     motorista_re_snapshot, cliente_id, linha_id, garagem_id, turno, hora_inicio, hora_fim, \
     hora_deslocamento, duracao, tipo_veiculo, placa_veiculo, created_at";

/// Persistência de escalas e suas viagens.
///
/// `criar` e `substituir` gravam cabeçalho e viagens numa única unidade:
/// ou tudo é gravado, ou nada muda.
#[async_trait]
pub trait EscalaRepository: Send + Sync {
    async fn listar(&self, filtros: &EscalaFiltros) -> AppResult<Vec<EscalaResumo>>;

    async fn buscar(&self, id: Uuid) -> AppResult<Option<EscalaDetalhe>>;

    async fn criar(
        &self,
        escala: NovaEscala,
        viagens: Vec<NovaEscalaViagem>,
    ) -> AppResult<EscalaDetalhe>;

    /// Atualiza o cabeçalho (mantendo `criado_por`) e troca todas as viagens.
    /// `None` quando a escala não existe.
    async fn substituir(
        &self,
        id: Uuid,
        escala: NovaEscala,
        viagens: Vec<NovaEscalaViagem>,
    ) -> AppResult<Option<EscalaDetalhe>>;

    /// Remove a escala e, em cascata, suas viagens
    async fn excluir(&self, id: Uuid) -> AppResult<bool>;

    async fn snapshots_motoristas(&self, ids: &[Uuid]) -> AppResult<Vec<MotoristaSnapshot>>;
}

pub struct PgEscalaRepository {
    pool: PgPool,
}

impl PgEscalaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EscalaRepository for PgEscalaRepository {
    async fn listar(&self, filtros: &EscalaFiltros) -> AppResult<Vec<EscalaResumo>> {
        let escalas = sqlx::query_as::<_, EscalaResumo>(
            r#"
            SELECT e.id, e.data_escala, e.garagem_id, e.dia_semana_texto, e.criado_por,
                   COUNT(v.id) AS total_viagens, e.created_at, e.updated_at
            FROM escalas e
            LEFT JOIN escala_viagens v ON v.escala_id = e.id
            WHERE ($1::date IS NULL OR e.data_escala >= $1)
              AND ($2::date IS NULL OR e.data_escala <= $2)
              AND ($3::uuid IS NULL OR e.garagem_id = $3)
            GROUP BY e.id
            ORDER BY e.data_escala DESC, e.created_at DESC
            "#,
        )
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .bind(filtros.garagem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(escalas)
    }

    async fn buscar(&self, id: Uuid) -> AppResult<Option<EscalaDetalhe>> {
        let escala = sqlx::query_as::<_, Escala>(&format!(
            "SELECT {} FROM escalas WHERE id = $1",
            ESCALA_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(escala) = escala else {
            return Ok(None);
        };

        let viagens = sqlx::query_as::<_, EscalaViagem>(&format!(
            "SELECT {} FROM escala_viagens WHERE escala_id = $1 ORDER BY ordem",
            VIAGEM_COLUMNS
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(EscalaDetalhe { escala, viagens }))
    }

    async fn criar(
        &self,
        escala: NovaEscala,
        viagens: Vec<NovaEscalaViagem>,
    ) -> AppResult<EscalaDetalhe> {
        let mut tx = self.pool.begin().await?;

        let escala = sqlx::query_as::<_, Escala>(&format!(
            r#"
            INSERT INTO escalas (id, data_escala, garagem_id, dia_semana_texto, criado_por)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            ESCALA_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(escala.data_escala)
        .bind(escala.garagem_id)
        .bind(escala.dia_semana_texto)
        .bind(escala.criado_por)
        .fetch_one(&mut *tx)
        .await?;

        let viagens = inserir_viagens(&mut tx, escala.id, &viagens).await?;
        tx.commit().await?;

        Ok(EscalaDetalhe { escala, viagens })
    }

    async fn substituir(
        &self,
        id: Uuid,
        escala: NovaEscala,
        viagens: Vec<NovaEscalaViagem>,
    ) -> AppResult<Option<EscalaDetalhe>> {
        let mut tx = self.pool.begin().await?;

        let escala = sqlx::query_as::<_, Escala>(&format!(
            r#"
            UPDATE escalas
            SET data_escala = $2, garagem_id = $3, dia_semana_texto = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ESCALA_COLUMNS
        ))
        .bind(id)
        .bind(escala.data_escala)
        .bind(escala.garagem_id)
        .bind(escala.dia_semana_texto)
        .fetch_optional(&mut *tx)
        .await?;

        // Sem commit a transação é desfeita no drop
        let Some(escala) = escala else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM escala_viagens WHERE escala_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let viagens = inserir_viagens(&mut tx, id, &viagens).await?;
        tx.commit().await?;

        Ok(Some(EscalaDetalhe { escala, viagens }))
    }

    async fn excluir(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM escalas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn snapshots_motoristas(&self, ids: &[Uuid]) -> AppResult<Vec<MotoristaSnapshot>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let motoristas = sqlx::query_as::<_, MotoristaSnapshot>(
            "SELECT id, nome, re FROM motoristas WHERE id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(motoristas)
    }
}

/// Insere as viagens em lote; `ordem` é a posição na lista recebida
async fn inserir_viagens(
    tx: &mut Transaction<'_, Postgres>,
    escala_id: Uuid,
    viagens: &[NovaEscalaViagem],
) -> Result<Vec<EscalaViagem>, sqlx::Error> {
    if viagens.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO escala_viagens (id, escala_id, ordem, motorista_id, motorista_nome_snapshot, \
         motorista_re_snapshot, cliente_id, linha_id, garagem_id, turno, hora_inicio, hora_fim, \
         hora_deslocamento, duracao, tipo_veiculo, placa_veiculo) ",
    );

    builder.push_values(viagens.iter().enumerate(), |mut row, (ordem, viagem)| {
        row.push_bind(Uuid::new_v4())
            .push_bind(escala_id)
            .push_bind(ordem as i32)
            .push_bind(viagem.motorista_id)
            .push_bind(viagem.motorista_nome_snapshot.clone())
            .push_bind(viagem.motorista_re_snapshot.clone())
            .push_bind(viagem.cliente_id)
            .push_bind(viagem.linha_id)
            .push_bind(viagem.garagem_id)
            .push_bind(viagem.turno.clone())
            .push_bind(viagem.hora_inicio)
            .push_bind(viagem.hora_fim)
            .push_bind(viagem.hora_deslocamento)
            .push_bind(viagem.duracao.clone())
            .push_bind(viagem.tipo_veiculo.clone())
            .push_bind(viagem.placa_veiculo.clone());
    });
    builder.push(" RETURNING ");
    builder.push(VIAGEM_COLUMNS);

    let mut inseridas = builder
        .build_query_as::<EscalaViagem>()
        .fetch_all(&mut **tx)
        .await?;
    inseridas.sort_by_key(|v| v.ordem);

    Ok(inseridas)
}
