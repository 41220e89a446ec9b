// src/shared/cors.rs

use actix_web::{
    http::{header, Method},
    middleware::DefaultHeaders,
    HttpRequest, HttpResponse,
};

use super::{erros::ApiError, shared_structs::ErroResponse};

/// Cabeçalhos adicionados a toda resposta. Qualquer origem é aceita.
pub fn cabecalhos_cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
        .add((header::ACCESS_CONTROL_MAX_AGE, "86400"))
        .add((header::CONTENT_TYPE, "application/json"))
}

/// Serviço padrão da aplicação: responde ao preflight `OPTIONS` de qualquer
/// caminho com 200 e a todo o resto que não casou com uma rota com 404.
pub async fn rota_padrao(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    tracing::debug!(method = %req.method(), path = req.path(), "rota não encontrada");

    HttpResponse::NotFound().json(ErroResponse {
        error: ApiError::nao_encontrado("Endpoint não encontrado").to_string(),
    })
}
