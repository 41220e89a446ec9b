// src/categorias/categoria_router.rs

use actix_web::{delete, get, post, web, HttpResponse};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::categoria_structs::{Categoria, NovaCategoria};
use crate::{
    shared::{
        erros::{ApiError, RepositorioError},
        shared_structs::MensagemResponse,
    },
    usuarios::auth_middleware::AuthenticatedUser,
    AppState,
};

/// Rota para buscar todas as categorias, ordenadas pelo nome.
#[get("/categorias")]
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categorias = data.categorias.listar().await?;

    Ok(HttpResponse::Ok().json(categorias))
}

/// Rota para cadastrar uma nova categoria.
#[post("/categorias")]
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ApiError> {
    let mut item = item.into_inner();
    item.nome = item.nome.trim().to_string();
    item.validate()?;

    let slug = item.slug_normalizado();
    if slug.is_empty() {
        return Err(ApiError::validacao(
            "Não foi possível gerar um slug válido para a categoria.",
        ));
    }

    let nova = Categoria {
        id: Uuid::new_v4(),
        nome: item.nome,
        slug,
        created_at: Utc::now(),
    };

    let categoria = data.categorias.criar(nova).await.map_err(|e| match e {
        RepositorioError::Duplicado => {
            ApiError::validacao("Já existe uma categoria com este slug.")
        }
        outro => outro.into(),
    })?;

    info!(
        categoria_id = %categoria.id,
        slug = %categoria.slug,
        user_id = %usuario.user_id,
        "categoria cadastrada"
    );

    Ok(HttpResponse::Ok().json(categoria))
}

/// Rota para deletar uma categoria. Categorias com promoções vinculadas não são removidas.
#[delete("/categorias/{id}")]
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let removida = data.categorias.deletar(id).await.map_err(|e| match e {
        RepositorioError::ReferenciaInvalida => ApiError::validacao(
            "A categoria possui promoções vinculadas e não pode ser removida.",
        ),
        outro => outro.into(),
    })?;

    if !removida {
        return Err(ApiError::nao_encontrado("Categoria não encontrada"));
    }

    info!(categoria_id = %id, user_id = %usuario.user_id, "categoria removida");

    Ok(HttpResponse::Ok().json(MensagemResponse::new("Categoria removida com sucesso")))
}
