// src/configuracoes/configuracao_repository.rs

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{query, query_scalar, PgPool};

use crate::shared::erros::RepositorioError;

/// Pares chave/valor da tabela `configuracoes`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfiguracaoRepository: Send + Sync {
    async fn buscar(&self, chave: &str) -> Result<Option<String>, RepositorioError>;
    /// Grava todos os pares ou nenhum.
    async fn salvar(&self, valores: Vec<(String, String)>) -> Result<(), RepositorioError>;
}

#[derive(Debug, Clone)]
pub struct PgConfiguracaoRepository {
    pool: PgPool,
}

impl PgConfiguracaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfiguracaoRepository for PgConfiguracaoRepository {
    async fn buscar(&self, chave: &str) -> Result<Option<String>, RepositorioError> {
        query_scalar::<_, String>("SELECT valor FROM configuracoes WHERE chave = $1")
            .bind(chave)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn salvar(&self, valores: Vec<(String, String)>) -> Result<(), RepositorioError> {
        let mut tx = self.pool.begin().await?;

        for (chave, valor) in &valores {
            query(
                "INSERT INTO configuracoes (chave, valor, updated_at) VALUES ($1, $2, NOW()) \
                 ON CONFLICT (chave) DO UPDATE SET valor = EXCLUDED.valor, updated_at = NOW()",
            )
            .bind(chave)
            .bind(valor)
            .execute(&mut tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
