// src/shared/erros.rs

use std::fmt::Display;

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use super::shared_structs::ErroResponse;

/// Código SQLSTATE do PostgreSQL para violação de unicidade.
const UNIQUE_VIOLATION: &str = "23505";
/// Código SQLSTATE do PostgreSQL para violação de chave estrangeira.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Erro devolvido pelas rotas. Cada variante corresponde a um status HTTP
/// e é serializada como `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validacao(String),

    #[error("Token inválido ou expirado")]
    NaoAutorizado,

    #[error("Email ou senha incorretos")]
    CredenciaisInvalidas,

    #[error("{0}")]
    NaoEncontrado(String),

    #[error("Erro interno do servidor")]
    Interno,
}

impl ApiError {
    pub fn validacao(mensagem: impl Into<String>) -> Self {
        Self::Validacao(mensagem.into())
    }

    pub fn nao_encontrado(mensagem: impl Into<String>) -> Self {
        Self::NaoEncontrado(mensagem.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validacao(_) => StatusCode::BAD_REQUEST,
            ApiError::NaoAutorizado | ApiError::CredenciaisInvalidas => StatusCode::UNAUTHORIZED,
            ApiError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ApiError::Interno => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErroResponse {
            error: self.to_string(),
        })
    }
}

/// Erros da camada de acesso a dados.
#[derive(Debug, Error)]
pub enum RepositorioError {
    #[error("registro duplicado")]
    Duplicado,

    #[error("referência inválida")]
    ReferenciaInvalida,

    #[error("erro de armazenamento: {0}")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositorioError {
    fn from(erro: sqlx::Error) -> Self {
        let codigo = erro
            .as_database_error()
            .and_then(|db| db.code())
            .map(|codigo| codigo.into_owned());

        match codigo.as_deref() {
            Some(UNIQUE_VIOLATION) => Self::Duplicado,
            Some(FOREIGN_KEY_VIOLATION) => Self::ReferenciaInvalida,
            _ => Self::Sql(erro),
        }
    }
}

impl From<RepositorioError> for ApiError {
    fn from(erro: RepositorioError) -> Self {
        match erro {
            RepositorioError::Duplicado => ApiError::validacao("Registro já existe."),
            RepositorioError::ReferenciaInvalida => {
                ApiError::validacao("Registro referencia um recurso inexistente ou ainda em uso.")
            }
            RepositorioError::Sql(source) => {
                error!("erro no banco de dados: {source}");

                ApiError::Interno
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(erros: ValidationErrors) -> Self {
        let mut campos: Vec<_> = erros.field_errors().into_iter().collect();
        campos.sort_by_key(|(campo, _)| *campo);

        let mensagem = campos
            .into_iter()
            .find_map(|(campo, erros)| {
                erros.first().map(|erro| match &erro.message {
                    Some(mensagem) => mensagem.to_string(),
                    None => format!("Campo '{campo}' inválido."),
                })
            })
            .unwrap_or_else(|| "Dados inválidos.".to_string());

        ApiError::Validacao(mensagem)
    }
}

/// Converte qualquer erro em 500, registrando o contexto no log.
pub trait ResultExt<T> {
    fn ou_500(self, contexto: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn ou_500(self, contexto: &str) -> Result<T, ApiError> {
        self.map_err(|erro| {
            error!("{contexto}: {erro}");

            ApiError::Interno
        })
    }
}

/// Corpo JSON ilegível ou sem campos obrigatórios vira 400 no formato padrão.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|erro: JsonPayloadError, _req: &HttpRequest| {
        ApiError::Validacao(format!("Corpo da requisição inválido: {erro}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|erro: QueryPayloadError, _req: &HttpRequest| {
        ApiError::Validacao(format!("Parâmetros de consulta inválidos: {erro}")).into()
    })
}

/// Um id que não é UUID nunca corresponde a um registro: 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_erro: PathError, _req: &HttpRequest| {
        ApiError::nao_encontrado("Recurso não encontrado").into()
    })
}
