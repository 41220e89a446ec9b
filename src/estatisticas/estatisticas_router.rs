// src/estatisticas/estatisticas_router.rs

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{shared::erros::ApiError, usuarios::auth_middleware::AuthenticatedUser, AppState};

/// Contadores exibidos no painel administrativo.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasResponse {
    pub total_promocoes: i64,
    pub promocoes_ativas: i64,
    pub total_categorias: i64,
}

#[get("/admin/estatisticas")]
pub async fn buscar_estatisticas(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let promocoes = data.promocoes.contar().await?;
    let total_categorias = data.categorias.contar().await?;

    debug!(user_id = %usuario.user_id, "estatísticas consultadas");

    Ok(HttpResponse::Ok().json(EstatisticasResponse {
        total_promocoes: promocoes.total,
        promocoes_ativas: promocoes.ativas,
        total_categorias,
    }))
}
