use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::models::itinerario::{
    ClienteLinhaNomes, Itinerario, ItinerarioDetalhe, ItinerarioFiltros, ItinerarioParada,
    NovaParada, NovoItinerario,
};
use crate::utils::errors::AppResult;

const ITINERARIO_COLUMNS: &str = "id, cliente_id, linha_id, garagem_id, turno, \
     cliente_nome_snapshot, linha_nome_snapshot, atualizado_em, created_at";

const PARADA_COLUMNS: &str = "id, itinerario_id, ordem, horario, referencia, bairro, endereco";

/// Persistência de itinerários com seus dias e paradas
#[async_trait]
pub trait ItinerarioRepository: Send + Sync {
    async fn listar(&self, filtros: &ItinerarioFiltros) -> AppResult<Vec<Itinerario>>;

    async fn buscar(&self, id: Uuid) -> AppResult<Option<ItinerarioDetalhe>>;

    /// Grava pela chave (cliente, linha, garagem, turno): cria o cabeçalho se
    /// não existir e regrava dias e paradas
    async fn salvar(
        &self,
        itinerario: NovoItinerario,
        dias: Vec<i16>,
        paradas: Vec<NovaParada>,
    ) -> AppResult<ItinerarioDetalhe>;

    async fn substituir(
        &self,
        id: Uuid,
        itinerario: NovoItinerario,
        dias: Vec<i16>,
        paradas: Vec<NovaParada>,
    ) -> AppResult<Option<ItinerarioDetalhe>>;

    async fn excluir(&self, id: Uuid) -> AppResult<bool>;

    /// Nomes atuais do cliente e da linha; `None` se algum não existir
    async fn nomes(&self, cliente_id: Uuid, linha_id: Uuid)
        -> AppResult<Option<ClienteLinhaNomes>>;
}

pub struct PgItinerarioRepository {
    pool: PgPool,
}

impl PgItinerarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItinerarioRepository for PgItinerarioRepository {
    async fn listar(&self, filtros: &ItinerarioFiltros) -> AppResult<Vec<Itinerario>> {
        let turno = filtros.turno.as_deref().map(|t| t.trim().to_uppercase());

        let itinerarios = sqlx::query_as::<_, Itinerario>(&format!(
            r#"
            SELECT {} FROM itinerarios
            WHERE ($1::uuid IS NULL OR cliente_id = $1)
              AND ($2::uuid IS NULL OR linha_id = $2)
              AND ($3::uuid IS NULL OR garagem_id = $3)
              AND ($4::text IS NULL OR turno = $4)
            ORDER BY cliente_nome_snapshot, linha_nome_snapshot, turno
            "#,
            ITINERARIO_COLUMNS
        ))
        .bind(filtros.cliente_id)
        .bind(filtros.linha_id)
        .bind(filtros.garagem_id)
        .bind(turno)
        .fetch_all(&self.pool)
        .await?;

        Ok(itinerarios)
    }

    async fn buscar(&self, id: Uuid) -> AppResult<Option<ItinerarioDetalhe>> {
        let itinerario = sqlx::query_as::<_, Itinerario>(&format!(
            "SELECT {} FROM itinerarios WHERE id = $1",
            ITINERARIO_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(itinerario) = itinerario else {
            return Ok(None);
        };

        let dias: Vec<i16> = sqlx::query_scalar(
            "SELECT dia_semana FROM itinerarios_dias WHERE itinerario_id = $1 ORDER BY dia_semana",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let paradas = sqlx::query_as::<_, ItinerarioParada>(&format!(
            "SELECT {} FROM itinerario_paradas WHERE itinerario_id = $1 ORDER BY ordem, posicao",
            PARADA_COLUMNS
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ItinerarioDetalhe { itinerario, dias, paradas }))
    }

    async fn salvar(
        &self,
        itinerario: NovoItinerario,
        dias: Vec<i16>,
        paradas: Vec<NovaParada>,
    ) -> AppResult<ItinerarioDetalhe> {
        let mut tx = self.pool.begin().await?;

        let itinerario = sqlx::query_as::<_, Itinerario>(&format!(
            r#"
            INSERT INTO itinerarios (id, cliente_id, linha_id, garagem_id, turno,
                                     cliente_nome_snapshot, linha_nome_snapshot, atualizado_em)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT ON CONSTRAINT itinerarios_chave_key DO UPDATE
            SET cliente_nome_snapshot = EXCLUDED.cliente_nome_snapshot,
                linha_nome_snapshot = EXCLUDED.linha_nome_snapshot,
                atualizado_em = EXCLUDED.atualizado_em
            RETURNING {}
            "#,
            ITINERARIO_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(itinerario.cliente_id)
        .bind(itinerario.linha_id)
        .bind(itinerario.garagem_id)
        .bind(itinerario.turno)
        .bind(itinerario.cliente_nome_snapshot)
        .bind(itinerario.linha_nome_snapshot)
        .bind(itinerario.atualizado_em)
        .fetch_one(&mut *tx)
        .await?;

        let (dias, paradas) = regravar_filhos(&mut tx, itinerario.id, &dias, &paradas).await?;
        tx.commit().await?;

        Ok(ItinerarioDetalhe { itinerario, dias, paradas })
    }

    async fn substituir(
        &self,
        id: Uuid,
        itinerario: NovoItinerario,
        dias: Vec<i16>,
        paradas: Vec<NovaParada>,
    ) -> AppResult<Option<ItinerarioDetalhe>> {
        let mut tx = self.pool.begin().await?;

        let itinerario = sqlx::query_as::<_, Itinerario>(&format!(
            r#"
            UPDATE itinerarios
            SET cliente_id = $2, linha_id = $3, garagem_id = $4, turno = $5,
                cliente_nome_snapshot = $6, linha_nome_snapshot = $7, atualizado_em = $8
            WHERE id = $1
            RETURNING {}
            "#,
            ITINERARIO_COLUMNS
        ))
        .bind(id)
        .bind(itinerario.cliente_id)
        .bind(itinerario.linha_id)
        .bind(itinerario.garagem_id)
        .bind(itinerario.turno)
        .bind(itinerario.cliente_nome_snapshot)
        .bind(itinerario.linha_nome_snapshot)
        .bind(itinerario.atualizado_em)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(itinerario) = itinerario else {
            return Ok(None);
        };

        let (dias, paradas) = regravar_filhos(&mut tx, id, &dias, &paradas).await?;
        tx.commit().await?;

        Ok(Some(ItinerarioDetalhe { itinerario, dias, paradas }))
    }

    async fn excluir(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM itinerarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn nomes(
        &self,
        cliente_id: Uuid,
        linha_id: Uuid,
    ) -> AppResult<Option<ClienteLinhaNomes>> {
        let nomes = sqlx::query_as::<_, ClienteLinhaNomes>(
            r#"
            SELECT c.nome AS cliente_nome, l.nome AS linha_nome, l.cliente_id AS linha_cliente_id
            FROM linhas l
            CROSS JOIN clientes c
            WHERE l.id = $2 AND c.id = $1
            "#,
        )
        .bind(cliente_id)
        .bind(linha_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(nomes)
    }
}

/// Apaga e reinsere dias e paradas do itinerário
async fn regravar_filhos(
    tx: &mut Transaction<'_, Postgres>,
    itinerario_id: Uuid,
    dias: &[i16],
    paradas: &[NovaParada],
) -> Result<(Vec<i16>, Vec<ItinerarioParada>), sqlx::Error> {
    sqlx::query("DELETE FROM itinerarios_dias WHERE itinerario_id = $1")
        .bind(itinerario_id)
        .execute(&mut **tx)
        .await?;
    sqlx::query("DELETE FROM itinerario_paradas WHERE itinerario_id = $1")
        .bind(itinerario_id)
        .execute(&mut **tx)
        .await?;

    if !dias.is_empty() {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO itinerarios_dias (id, itinerario_id, dia_semana) ");
        builder.push_values(dias, |mut row, dia| {
            row.push_bind(Uuid::new_v4())
                .push_bind(itinerario_id)
                .push_bind(*dia);
        });
        builder.build().execute(&mut **tx).await?;
    }

    if paradas.is_empty() {
        return Ok((dias.to_vec(), Vec::new()));
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO itinerario_paradas \
         (id, itinerario_id, ordem, posicao, horario, referencia, bairro, endereco) ",
    );
    builder.push_values(paradas, |mut row, parada| {
        row.push_bind(Uuid::new_v4())
            .push_bind(itinerario_id)
            .push_bind(parada.ordem)
            .push_bind(parada.posicao)
            .push_bind(parada.horario)
            .push_bind(parada.referencia.clone())
            .push_bind(parada.bairro.clone())
            .push_bind(parada.endereco.clone());
    });
    builder.build().execute(&mut **tx).await?;

    let inseridas = sqlx::query_as::<_, ItinerarioParada>(&format!(
        "SELECT {} FROM itinerario_paradas WHERE itinerario_id = $1 ORDER BY ordem, posicao",
        PARADA_COLUMNS
    ))
    .bind(itinerario_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok((dias.to_vec(), inseridas))
}
