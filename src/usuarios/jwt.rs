// src/usuarios/jwt.rs

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;

use super::usuario_structs::{Claims, Usuario};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("falha ao assinar token: {0}")]
    Assinatura(#[source] jsonwebtoken::errors::Error),

    #[error("token expirado")]
    Expirado,

    #[error("token inválido: {0}")]
    Invalido(#[source] jsonwebtoken::errors::Error),
}

/// Chave e validade dos tokens HS256.
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    validade: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("validade", &self.validade)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, validade_horas: i64) -> Self {
        Self {
            secret: secret.into(),
            validade: Duration::hours(validade_horas),
        }
    }

    pub fn emitir(&self, usuario: &Usuario) -> Result<String, TokenError> {
        self.emitir_em(usuario, Utc::now())
    }

    /// Emite um token como se o instante atual fosse `agora`.
    pub fn emitir_em(&self, usuario: &Usuario, agora: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: usuario.id,
            email: usuario.email.clone(),
            role: usuario.role.clone(),
            iat: agora.timestamp(),
            exp: (agora + self.validade).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Assinatura)
    }

    /// Verifica assinatura e expiração.
    pub fn validar(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expirado,
            _ => TokenError::Invalido(e),
        })
    }
}
