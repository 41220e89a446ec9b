// src/rotas.rs

use actix_web::{guard, web};

use crate::{
    categorias::categoria_router,
    configuracoes::configuracao_router,
    estatisticas::estatisticas_router,
    promocoes::promocao_router,
    saude::saude_router,
    shared::erros::{json_config, path_config, query_config},
    usuarios::usuario_router,
};

/// Registra todas as rotas da API, relativas ao prefixo configurado.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        // Raiz e saúde
        .service(
            web::resource(["", "/"])
                .guard(guard::Get())
                .to(saude_router::raiz),
        )
        .service(saude_router::verificar_saude)
        // Autenticação
        .service(usuario_router::login_usuario)
        // Módulo de Categorias
        .service(categoria_router::buscar_categorias)
        .service(categoria_router::cadastrar_categoria)
        .service(categoria_router::deletar_categoria)
        // Módulo de Promoções
        .service(promocao_router::buscar_promocoes)
        .service(promocao_router::buscar_promocao)
        .service(promocao_router::cadastrar_promocao)
        .service(promocao_router::atualizar_promocao)
        .service(promocao_router::deletar_promocao)
        // Links das redes sociais
        .service(configuracao_router::buscar_links)
        .service(configuracao_router::atualizar_links)
        // Painel administrativo
        .service(estatisticas_router::buscar_estatisticas);
}
