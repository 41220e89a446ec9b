// src/main.rs

use std::{process, sync::Arc};

use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Importa os módulos
mod categorias;    // Módulo de categorias
mod config;        // Configuração (CLI + variáveis de ambiente)
mod configuracoes; // Links das redes sociais
mod estatisticas;  // Painel administrativo
mod promocoes;     // Módulo de promoções
mod rotas;
mod saude;
mod seed;
mod shared;        // Módulo shared
mod usuarios;      // Módulo de usuários
#[cfg(test)]
mod test_helpers;

use categorias::categoria_repository::{CategoriaRepository, PgCategoriaRepository};
use config::ServerConfig;
use configuracoes::configuracao_repository::{ConfiguracaoRepository, PgConfiguracaoRepository};
use promocoes::promocao_repository::{PgPromocaoRepository, PromocaoRepository};
use shared::cors::{cabecalhos_cors, rota_padrao};
use usuarios::{
    jwt::JwtConfig,
    usuario_repository::{PgUsuarioRepository, UsuarioRepository},
};

// Estado compartilhado: repositórios e configuração dos tokens.
pub struct AppState {
    pub categorias: Arc<dyn CategoriaRepository>,
    pub promocoes: Arc<dyn PromocaoRepository>,
    pub usuarios: Arc<dyn UsuarioRepository>,
    pub configuracoes: Arc<dyn ConfiguracaoRepository>,
    pub jwt: JwtConfig,
    /// Verificado no login de e-mails desconhecidos.
    pub hash_referencia: String,
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Conecta ao PostgreSQL e aplica as migrações pendentes.
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.banco.max_conexoes)
        .connect(&config.banco.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            error!("falha ao conectar ao banco PostgreSQL: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!().run(&db_pool).await {
        error!("falha ao aplicar migrações: {e}");
        process::exit(1);
    }

    let hash_referencia = match seed::gerar_hash_referencia().await {
        Ok(hash) => hash,
        Err(e) => {
            error!("falha ao gerar hash de referência: {e}");
            process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState {
        categorias: Arc::new(PgCategoriaRepository::new(db_pool.clone())),
        promocoes: Arc::new(PgPromocaoRepository::new(db_pool.clone())),
        usuarios: Arc::new(PgUsuarioRepository::new(db_pool.clone())),
        configuracoes: Arc::new(PgConfiguracaoRepository::new(db_pool)),
        jwt: JwtConfig::new(config.auth.jwt_secret.clone(), config.auth.jwt_expiracao_horas),
        hash_referencia,
    });

    if let Err(e) = seed::semear(&app_state, config.admin_inicial()).await {
        error!("falha ao criar dados iniciais: {e}");
        process::exit(1);
    }

    let prefixo = config.prefixo_api();
    let endereco = config.socket_addr();

    info!(endereco = %endereco, prefixo = %prefixo, "iniciando API Ofertas do PIT");

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            // .clone() é necessário porque a closure é executada por worker.
            .app_data(app_state.clone())
            .wrap(cabecalhos_cors())
            .wrap(Logger::default())
            .service(web::scope(&prefixo).configure(rotas::configurar))
            // Preflight OPTIONS e 404 de qualquer caminho
            .default_service(web::to(rota_padrao))
    })
    .bind(endereco)?
    .run()
    .await
}
