// src/usuarios/usuario_structs.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Papel atribuído a todo usuário criado pela aplicação.
pub const ROLE_ADMIN: &str = "admin";

/// Estrutura que representa um usuário no banco de dados.
/// A senha é armazenada apenas como hash bcrypt.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub email: String,
    pub senha_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Dados para inserir um usuário (senha já em hash).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoUsuario {
    pub email: String,
    pub senha_hash: String,
    pub role: String,
}

/// Estrutura para receber dados de login do usuário.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email e senha são obrigatórios"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email e senha são obrigatórios"))]
    pub senha: String, // Senha em texto claro
}

/// Payload do JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Dados públicos do usuário, devolvidos no login.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            email: usuario.email,
            role: usuario.role,
            created_at: usuario.created_at,
        }
    }
}

/// Resposta de sucesso do login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UsuarioResponse,
}
