// src/configuracoes/configuracao_structs.rs

use serde::{Deserialize, Serialize};
use validator::validate_url;

use crate::shared::erros::ApiError;

pub const CHAVE_WHATSAPP: &str = "links_whatsapp";
pub const CHAVE_TELEGRAM: &str = "links_telegram";

pub const WHATSAPP_PADRAO: &str = "https://wa.me/";
pub const TELEGRAM_PADRAO: &str = "https://t.me/";

/// Links das redes sociais exibidos no site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksResponse {
    pub whatsapp: String,
    pub telegram: String,
}

/// Corpo do `PUT /config/links`. Strings vazias contam como ausentes.
#[derive(Debug, Default, Deserialize)]
pub struct AtualizacaoLinks {
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
}

impl AtualizacaoLinks {
    /// Pares `(chave, valor)` a gravar, já validados.
    pub fn em_pares(self) -> Result<Vec<(String, String)>, ApiError> {
        let informados = [
            (CHAVE_WHATSAPP, "WhatsApp", self.whatsapp),
            (CHAVE_TELEGRAM, "Telegram", self.telegram),
        ];

        let mut pares = Vec::new();
        for (chave, rede, valor) in informados {
            let Some(valor) = valor.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
                continue;
            };

            if !validate_url(valor.as_str()) {
                return Err(ApiError::validacao(format!(
                    "O link do {rede} deve ser uma URL válida."
                )));
            }

            pares.push((chave.to_string(), valor));
        }

        if pares.is_empty() {
            return Err(ApiError::validacao(
                "Informe ao menos um link (whatsapp ou telegram).",
            ));
        }

        Ok(pares)
    }
}
