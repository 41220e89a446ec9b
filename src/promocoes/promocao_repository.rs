// src/promocoes/promocao_repository.rs

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{query, query_as, query_scalar, PgPool};
use uuid::Uuid;

use super::promocao_structs::{DadosPromocao, FiltroPromocoes, Promocao, LIMITE_LISTAGEM};
use crate::shared::erros::RepositorioError;

const SELECT_PROMOCAO: &str = "SELECT p.id, p.titulo, p.imagem_produto, p.preco_original, \
     p.preco_oferta, p.percentual_desconto, p.link_oferta, p.categoria_id, p.ativo, \
     p.data_postagem, c.nome AS categoria_nome, c.slug AS categoria_slug \
     FROM promocoes p LEFT JOIN categorias c ON c.id = p.categoria_id";

/// Contadores do painel administrativo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContagemPromocoes {
    pub total: i64,
    pub ativas: i64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PromocaoRepository: Send + Sync {
    async fn listar(&self, filtro: FiltroPromocoes) -> Result<Vec<Promocao>, RepositorioError>;
    async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Promocao>, RepositorioError>;
    async fn criar(&self, id: Uuid, dados: DadosPromocao) -> Result<Promocao, RepositorioError>;
    /// `None` quando a promoção deixou de existir.
    async fn atualizar(
        &self,
        id: Uuid,
        dados: DadosPromocao,
    ) -> Result<Option<Promocao>, RepositorioError>;
    async fn deletar(&self, id: Uuid) -> Result<bool, RepositorioError>;
    async fn contar(&self) -> Result<ContagemPromocoes, RepositorioError>;
}

#[derive(Debug, Clone)]
pub struct PgPromocaoRepository {
    pool: PgPool,
}

impl PgPromocaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn recarregar(&self, id: Uuid) -> Result<Promocao, RepositorioError> {
        self.buscar_por_id(id)
            .await?
            .ok_or(RepositorioError::Sql(sqlx::Error::RowNotFound))
    }
}

#[async_trait]
impl PromocaoRepository for PgPromocaoRepository {
    async fn listar(&self, filtro: FiltroPromocoes) -> Result<Vec<Promocao>, RepositorioError> {
        let sql = format!(
            "{SELECT_PROMOCAO} \
             WHERE ($1::uuid IS NULL OR p.categoria_id = $1) \
             AND ($2::boolean IS NULL OR p.ativo = $2) \
             ORDER BY {} LIMIT $3",
            filtro.ordenacao.clausula_sql()
        );

        query_as::<_, Promocao>(&sql)
            .bind(filtro.categoria_id)
            .bind(filtro.ativo)
            .bind(LIMITE_LISTAGEM)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Promocao>, RepositorioError> {
        let sql = format!("{SELECT_PROMOCAO} WHERE p.id = $1");

        query_as::<_, Promocao>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn criar(&self, id: Uuid, dados: DadosPromocao) -> Result<Promocao, RepositorioError> {
        query(
            "INSERT INTO promocoes (id, titulo, imagem_produto, preco_original, preco_oferta, \
             percentual_desconto, link_oferta, categoria_id, ativo, data_postagem) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(id)
        .bind(&dados.titulo)
        .bind(&dados.imagem_produto)
        .bind(&dados.preco_original)
        .bind(&dados.preco_oferta)
        .bind(dados.percentual_desconto)
        .bind(&dados.link_oferta)
        .bind(dados.categoria_id)
        .bind(dados.ativo)
        .bind(dados.data_postagem)
        .execute(&self.pool)
        .await?;

        self.recarregar(id).await
    }

    async fn atualizar(
        &self,
        id: Uuid,
        dados: DadosPromocao,
    ) -> Result<Option<Promocao>, RepositorioError> {
        let resultado = query(
            "UPDATE promocoes SET titulo = $2, imagem_produto = $3, preco_original = $4, \
             preco_oferta = $5, percentual_desconto = $6, link_oferta = $7, categoria_id = $8, \
             ativo = $9 WHERE id = $1",
        )
        .bind(id)
        .bind(&dados.titulo)
        .bind(&dados.imagem_produto)
        .bind(&dados.preco_original)
        .bind(&dados.preco_oferta)
        .bind(dados.percentual_desconto)
        .bind(&dados.link_oferta)
        .bind(dados.categoria_id)
        .bind(dados.ativo)
        .execute(&self.pool)
        .await?;

        if resultado.rows_affected() == 0 {
            return Ok(None);
        }

        self.buscar_por_id(id).await
    }

    async fn deletar(&self, id: Uuid) -> Result<bool, RepositorioError> {
        let resultado = query("DELETE FROM promocoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }

    async fn contar(&self) -> Result<ContagemPromocoes, RepositorioError> {
        let total = query_scalar::<_, i64>("SELECT COUNT(*) FROM promocoes")
            .fetch_one(&self.pool)
            .await?;
        let ativas = query_scalar::<_, i64>("SELECT COUNT(*) FROM promocoes WHERE ativo = TRUE")
            .fetch_one(&self.pool)
            .await?;

        Ok(ContagemPromocoes { total, ativas })
    }
}
