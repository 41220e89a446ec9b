// src/categorias/categoria_repository.rs

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{query, query_as, query_scalar, PgPool};
use uuid::Uuid;

use super::categoria_structs::Categoria;
use crate::shared::erros::RepositorioError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoriaRepository: Send + Sync {
    /// Todas as categorias em ordem alfabética.
    async fn listar(&self) -> Result<Vec<Categoria>, RepositorioError>;
    async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Categoria>, RepositorioError>;
    async fn criar(&self, categoria: Categoria) -> Result<Categoria, RepositorioError>;
    /// `false` quando não havia categoria com o id.
    async fn deletar(&self, id: Uuid) -> Result<bool, RepositorioError>;
    async fn contar(&self) -> Result<i64, RepositorioError>;
}

#[derive(Debug, Clone)]
pub struct PgCategoriaRepository {
    pool: PgPool,
}

impl PgCategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoriaRepository for PgCategoriaRepository {
    async fn listar(&self) -> Result<Vec<Categoria>, RepositorioError> {
        query_as::<_, Categoria>(
            "SELECT id, nome, slug, created_at FROM categorias ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Categoria>, RepositorioError> {
        query_as::<_, Categoria>("SELECT id, nome, slug, created_at FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn criar(&self, categoria: Categoria) -> Result<Categoria, RepositorioError> {
        query_as::<_, Categoria>(
            "INSERT INTO categorias (id, nome, slug, created_at) VALUES ($1, $2, $3, $4) \
             RETURNING id, nome, slug, created_at",
        )
        .bind(categoria.id)
        .bind(&categoria.nome)
        .bind(&categoria.slug)
        .bind(categoria.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn deletar(&self, id: Uuid) -> Result<bool, RepositorioError> {
        let resultado = query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }

    async fn contar(&self) -> Result<i64, RepositorioError> {
        query_scalar::<_, i64>("SELECT COUNT(*) FROM categorias")
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }
}
