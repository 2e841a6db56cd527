use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::motorista::MotoristaSnapshot;
use crate::models::painel::ViagemPainel;
use crate::models::viagem_extra::ViagemExtra;
use crate::utils::errors::AppResult;

/// Consultas do painel do motorista
pub struct PainelRepository {
    pool: PgPool,
}

impl PainelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn motorista(&self, id: Uuid) -> AppResult<Option<MotoristaSnapshot>> {
        let motorista = sqlx::query_as::<_, MotoristaSnapshot>(
            "SELECT id, nome, re FROM motoristas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn em_folga(&self, motorista_id: Uuid, data: NaiveDate) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM folgas WHERE motorista_id = $1 AND data_folga = $2)",
        )
        .bind(motorista_id)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Viagens da escala do dia atribuídas ao motorista, com nomes atuais
    /// de cliente e linha
    pub async fn viagens(&self, motorista_id: Uuid, data: NaiveDate) -> AppResult<Vec<ViagemPainel>> {
        let viagens = sqlx::query_as::<_, ViagemPainel>(
            r#"
            SELECT e.id AS escala_id, e.data_escala,
                   COALESCE(v.garagem_id, e.garagem_id) AS garagem_id,
                   v.cliente_id, c.nome AS cliente_nome,
                   v.linha_id, l.nome AS linha_nome,
                   v.turno, v.hora_inicio, v.hora_fim, v.hora_deslocamento, v.duracao,
                   v.tipo_veiculo, v.placa_veiculo
            FROM escala_viagens v
            JOIN escalas e ON e.id = v.escala_id
            LEFT JOIN clientes c ON c.id = v.cliente_id
            LEFT JOIN linhas l ON l.id = v.linha_id
            WHERE v.motorista_id = $1 AND e.data_escala = $2
            ORDER BY v.hora_inicio
            "#,
        )
        .bind(motorista_id)
        .bind(data)
        .fetch_all(&self.pool)
        .await?;

        Ok(viagens)
    }

    pub async fn viagens_extras(
        &self,
        motorista_id: Uuid,
        data: NaiveDate,
    ) -> AppResult<Vec<ViagemExtra>> {
        let viagens = sqlx::query_as::<_, ViagemExtra>(
            r#"
            SELECT id, data_viagem, garagem_id, cliente_id, linha_id, motorista_id, veiculo_id,
                   descricao, solicitante, hora_inicio, hora_fim, created_at
            FROM viagens_extras
            WHERE motorista_id = $1 AND data_viagem = $2
            ORDER BY hora_inicio NULLS LAST
            "#,
        )
        .bind(motorista_id)
        .bind(data)
        .fetch_all(&self.pool)
        .await?;

        Ok(viagens)
    }
}
