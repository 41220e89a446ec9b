// src/usuarios/auth_middleware.rs

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use tracing::{debug, error};
use uuid::Uuid;

use super::jwt::TokenError;
use crate::{shared::erros::ApiError, AppState};

/// Usuário autenticado, extraído do token Bearer das requisições protegidas.
///
/// Basta declarar um argumento deste tipo na rota para exigir autenticação.
/// Cabeçalho ausente, esquema diferente de Bearer, assinatura inválida, token
/// malformado ou expirado resultam todos no mesmo 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub user_email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(autenticar(req))
    }
}

fn autenticar(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
        error!("AppState não registrado na aplicação");
        return Err(ApiError::Interno);
    };

    let Some(token) = extrair_bearer(req) else {
        debug!(path = req.path(), "requisição sem token Bearer");
        return Err(ApiError::NaoAutorizado);
    };

    let claims = app_state.jwt.validar(token).map_err(|e| {
        match &e {
            TokenError::Expirado => debug!("token expirado"),
            other => debug!("token rejeitado: {other}"),
        }
        ApiError::NaoAutorizado
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        user_email: claims.email,
    })
}

fn extrair_bearer(req: &HttpRequest) -> Option<&str> {
    let valor = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (esquema, token) = valor.split_once(' ')?;
    let token = token.trim();

    if !esquema.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
