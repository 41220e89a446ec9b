// src/categorias/categoria_structs.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::slug::gerar_slug;

/// Estrutura para receber dados de uma nova categoria na requisição POST.
/// O slug é opcional; sem ele, é derivado do nome.
#[derive(Debug, Deserialize, Validate)]
pub struct NovaCategoria {
    #[serde(default)]
    #[validate(length(min = 1, message = "O nome da categoria é obrigatório."))]
    pub nome: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl NovaCategoria {
    /// Slug informado (normalizado) ou, na falta dele, derivado do nome.
    pub fn slug_normalizado(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => gerar_slug(slug),
            _ => gerar_slug(&self.nome),
        }
    }
}

/// Estrutura que representa uma categoria no banco de dados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: Uuid,
    pub nome: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
