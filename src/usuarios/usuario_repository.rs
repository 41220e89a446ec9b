// src/usuarios/usuario_repository.rs

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{query_as, PgPool};
use uuid::Uuid;

use super::usuario_structs::{NovoUsuario, Usuario};
use crate::shared::erros::RepositorioError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn buscar_por_email(&self, email: &str) -> Result<Option<Usuario>, RepositorioError>;
    async fn criar(&self, usuario: NovoUsuario) -> Result<Usuario, RepositorioError>;
}

#[derive(Debug, Clone)]
pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn buscar_por_email(&self, email: &str) -> Result<Option<Usuario>, RepositorioError> {
        query_as::<_, Usuario>(
            "SELECT id, email, senha_hash, role, created_at FROM usuarios WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn criar(&self, usuario: NovoUsuario) -> Result<Usuario, RepositorioError> {
        query_as::<_, Usuario>(
            "INSERT INTO usuarios (id, email, senha_hash, role) VALUES ($1, $2, $3, $4) \
             RETURNING id, email, senha_hash, role, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&usuario.email)
        .bind(&usuario.senha_hash)
        .bind(&usuario.role)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }
}
