// src/saude/saude_router.rs

use actix_web::{get, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::shared_structs::MensagemResponse;

pub const NOME_SERVICO: &str = "Ofertas do PIT API";

#[derive(Debug, Serialize, Deserialize)]
pub struct SaudeResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub service: String,
}

/// Verificação de vida do serviço. Não consulta o banco.
#[get("/health")]
pub async fn verificar_saude() -> HttpResponse {
    HttpResponse::Ok().json(SaudeResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: NOME_SERVICO.to_string(),
    })
}

/// Registrada em `""` e `"/"` para responder com e sem barra final sob o prefixo.
pub async fn raiz() -> HttpResponse {
    HttpResponse::Ok().json(MensagemResponse::new(NOME_SERVICO))
}
