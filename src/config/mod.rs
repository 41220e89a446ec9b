// src/config/mod.rs

//! Configuração da API, lida de argumentos de linha de comando e variáveis de ambiente.

use clap::{Args, Parser};

/// Configuração completa do servidor Ofertas do PIT.
#[derive(Debug, Parser)]
#[command(name = "ofertas-pit", about = "API do Ofertas do PIT", long_about = None)]
pub struct ServerConfig {
    /// Endereço e porta do servidor HTTP.
    #[command(flatten)]
    pub servidor: ServidorConfig,

    /// Conexão com o PostgreSQL.
    #[command(flatten)]
    pub banco: BancoConfig,

    /// Emissão e validação de tokens.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Nível de log (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Args)]
pub struct ServidorConfig {
    /// Endereço de escuta
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Porta de escuta
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Prefixo das rotas da API (vazio para servir na raiz)
    #[arg(long, env = "API_PREFIX", default_value = "/api")]
    pub prefixo: String,
}

#[derive(Debug, Args)]
pub struct BancoConfig {
    /// String de conexão do `PostgreSQL`
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Tamanho máximo do pool de conexões
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value = "5")]
    pub max_conexoes: u32,
}

#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Chave secreta HS256 dos tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Validade do token em horas
    #[arg(long, env = "JWT_EXPIRACAO_HORAS", default_value = "24")]
    pub jwt_expiracao_horas: i64,

    /// E-mail do administrador criado na inicialização
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// Senha do administrador criado na inicialização
    #[arg(long, env = "ADMIN_SENHA", hide_env_values = true)]
    pub admin_senha: Option<String>,
}

impl ServerConfig {
    /// Carrega a configuração do `.env` (se existir), do ambiente e da linha de comando.
    ///
    /// # Errors
    ///
    /// Retorna erro se algum argumento obrigatório faltar ou não puder ser convertido.
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.servidor.host, self.servidor.port)
    }

    /// Prefixo normalizado: sem barra final, com barra inicial quando não vazio.
    #[must_use]
    pub fn prefixo_api(&self) -> String {
        let prefixo = self.servidor.prefixo.trim().trim_end_matches('/');

        if prefixo.is_empty() || prefixo.starts_with('/') {
            prefixo.to_string()
        } else {
            format!("/{prefixo}")
        }
    }

    /// Credenciais do administrador inicial, quando ambas estão configuradas.
    pub fn admin_inicial(&self) -> Option<(&str, &str)> {
        match (&self.auth.admin_email, &self.auth.admin_senha) {
            (Some(email), Some(senha)) if !email.trim().is_empty() && !senha.is_empty() => {
                Some((email.trim(), senha.as_str()))
            }
            _ => None,
        }
    }
}
