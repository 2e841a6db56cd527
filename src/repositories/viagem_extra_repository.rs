use crate::models::viagem_extra::{SalvarViagemExtraRequest, ViagemExtra, ViagemExtraFiltros};
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

const VIAGEM_EXTRA_COLUMNS: &str = "id, data_viagem, garagem_id, cliente_id, linha_id, \
     motorista_id, veiculo_id, descricao, solicitante, hora_inicio, hora_fim, created_at";

pub struct ViagemExtraRepository {
    pool: PgPool,
}

impl ViagemExtraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &SalvarViagemExtraRequest) -> AppResult<ViagemExtra> {
        let viagem = sqlx::query_as::<_, ViagemExtra>(&format!(
            r#"
            INSERT INTO viagens_extras (id, data_viagem, garagem_id, cliente_id, linha_id,
                                        motorista_id, veiculo_id, descricao, solicitante,
                                        hora_inicio, hora_fim)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            VIAGEM_EXTRA_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(request.data_viagem)
        .bind(request.garagem_id)
        .bind(request.cliente_id)
        .bind(request.linha_id)
        .bind(request.motorista_id)
        .bind(request.veiculo_id)
        .bind(&request.descricao)
        .bind(&request.solicitante)
        .bind(request.hora_inicio)
        .bind(request.hora_fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(viagem)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ViagemExtra>> {
        let viagem = sqlx::query_as::<_, ViagemExtra>(&format!(
            "SELECT {} FROM viagens_extras WHERE id = $1",
            VIAGEM_EXTRA_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(viagem)
    }

    pub async fn list(&self, filtros: &ViagemExtraFiltros) -> AppResult<Vec<ViagemExtra>> {
        let viagens = sqlx::query_as::<_, ViagemExtra>(&format!(
            r#"
            SELECT {} FROM viagens_extras
            WHERE ($1::date IS NULL OR data_viagem >= $1)
              AND ($2::date IS NULL OR data_viagem <= $2)
              AND ($3::uuid IS NULL OR garagem_id = $3)
              AND ($4::uuid IS NULL OR motorista_id = $4)
            ORDER BY data_viagem DESC, hora_inicio NULLS LAST
            "#,
            VIAGEM_EXTRA_COLUMNS
        ))
        .bind(filtros.data_inicio)
        .bind(filtros.data_fim)
        .bind(filtros.garagem_id)
        .bind(filtros.motorista_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(viagens)
    }

    /// Substitui todos os campos editáveis
    pub async fn update(
        &self,
        id: Uuid,
        request: &SalvarViagemExtraRequest,
    ) -> AppResult<Option<ViagemExtra>> {
        let viagem = sqlx::query_as::<_, ViagemExtra>(&format!(
            r#"
            UPDATE viagens_extras
            SET data_viagem = $2, garagem_id = $3, cliente_id = $4, linha_id = $5,
                motorista_id = $6, veiculo_id = $7, descricao = $8, solicitante = $9,
                hora_inicio = $10, hora_fim = $11
            WHERE id = $1
            RETURNING {}
            "#,
            VIAGEM_EXTRA_COLUMNS
        ))
        .bind(id)
        .bind(request.data_viagem)
        .bind(request.garagem_id)
        .bind(request.cliente_id)
        .bind(request.linha_id)
        .bind(request.motorista_id)
        .bind(request.veiculo_id)
        .bind(&request.descricao)
        .bind(&request.solicitante)
        .bind(request.hora_inicio)
        .bind(request.hora_fim)
        .fetch_optional(&self.pool)
        .await?;

        Ok(viagem)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM viagens_extras WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
