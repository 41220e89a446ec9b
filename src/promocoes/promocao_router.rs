// src/promocoes/promocao_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::promocao_structs::{
    AtualizacaoPromocao, FiltroPromocoes, NovaPromocao, PromocaoResponse, PromocoesQuery,
};
use crate::{
    shared::{
        erros::{ApiError, RepositorioError},
        shared_structs::MensagemResponse,
    },
    usuarios::auth_middleware::AuthenticatedUser,
    AppState,
};

const NAO_ENCONTRADA: &str = "Promoção não encontrada";
const CATEGORIA_INEXISTENTE: &str = "Categoria não encontrada.";

/// Rejeita `categoria_id` que não aponta para uma categoria existente.
async fn garantir_categoria(data: &AppState, categoria_id: Uuid) -> Result<(), ApiError> {
    match data.categorias.buscar_por_id(categoria_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::validacao(CATEGORIA_INEXISTENTE)),
    }
}

fn erro_de_gravacao(erro: RepositorioError) -> ApiError {
    match erro {
        // a categoria pode ter sido removida entre a checagem e a gravação
        RepositorioError::ReferenciaInvalida => ApiError::validacao(CATEGORIA_INEXISTENTE),
        outro => outro.into(),
    }
}

/// Rota para listar promoções com filtros opcionais de categoria, status e ordenação.
#[get("/promocoes")]
pub async fn buscar_promocoes(
    data: web::Data<AppState>,
    query: web::Query<PromocoesQuery>,
) -> Result<HttpResponse, ApiError> {
    let filtro = FiltroPromocoes::try_from(query.into_inner())?;

    let promocoes: Vec<PromocaoResponse> = data
        .promocoes
        .listar(filtro)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(promocoes))
}

/// Rota para buscar uma promoção pelo id.
#[get("/promocoes/{id}")]
pub async fn buscar_promocao(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let promocao = data
        .promocoes
        .buscar_por_id(path.into_inner())
        .await?
        .ok_or_else(|| ApiError::nao_encontrado(NAO_ENCONTRADA))?;

    Ok(HttpResponse::Ok().json(PromocaoResponse::from(promocao)))
}

/// Rota para cadastrar uma promoção. O percentual de desconto é calculado no servidor.
#[post("/promocoes")]
pub async fn cadastrar_promocao(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    item: web::Json<NovaPromocao>,
) -> Result<HttpResponse, ApiError> {
    let item = item.into_inner();
    item.validate()?;

    let dados = item.into_dados(Utc::now())?;
    garantir_categoria(&data, dados.categoria_id).await?;

    let promocao = data
        .promocoes
        .criar(Uuid::new_v4(), dados)
        .await
        .map_err(erro_de_gravacao)?;

    info!(
        promocao_id = %promocao.id,
        desconto = promocao.percentual_desconto,
        user_id = %usuario.user_id,
        "promoção cadastrada"
    );

    Ok(HttpResponse::Ok().json(PromocaoResponse::from(promocao)))
}

/// Rota para atualizar parcialmente uma promoção.
#[put("/promocoes/{id}")]
pub async fn atualizar_promocao(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    path: web::Path<Uuid>,
    item: web::Json<AtualizacaoPromocao>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let atualizacao = item.into_inner();
    atualizacao.validate()?;

    let atual = data
        .promocoes
        .buscar_por_id(id)
        .await?
        .ok_or_else(|| ApiError::nao_encontrado(NAO_ENCONTRADA))?;

    if let Some(categoria_id) = atualizacao.categoria_id {
        if categoria_id != atual.categoria_id {
            garantir_categoria(&data, categoria_id).await?;
        }
    }

    let dados = atual.aplicar(atualizacao)?;

    let promocao = data
        .promocoes
        .atualizar(id, dados)
        .await
        .map_err(erro_de_gravacao)?
        .ok_or_else(|| ApiError::nao_encontrado(NAO_ENCONTRADA))?;

    info!(promocao_id = %id, user_id = %usuario.user_id, "promoção atualizada");

    Ok(HttpResponse::Ok().json(PromocaoResponse::from(promocao)))
}

/// Rota para deletar uma promoção.
#[delete("/promocoes/{id}")]
pub async fn deletar_promocao(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !data.promocoes.deletar(id).await? {
        return Err(ApiError::nao_encontrado(NAO_ENCONTRADA));
    }

    info!(promocao_id = %id, user_id = %usuario.user_id, "promoção removida");

    Ok(HttpResponse::Ok().json(MensagemResponse::new("Promoção removida com sucesso")))
}
