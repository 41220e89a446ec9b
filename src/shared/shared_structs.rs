// src/shared/shared_structs.rs

use serde::{Deserialize, Serialize};

/// Corpo padrão das respostas de erro: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErroResponse {
    pub error: String,
}

/// Corpo das respostas de confirmação (remoções, atualizações sem retorno de entidade).
#[derive(Debug, Serialize, Deserialize)]
pub struct MensagemResponse {
    pub message: String,
}

impl MensagemResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
