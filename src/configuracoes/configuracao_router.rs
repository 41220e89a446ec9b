// src/configuracoes/configuracao_router.rs

use actix_web::{get, put, web, HttpResponse};
use tracing::info;

use super::configuracao_structs::{
    AtualizacaoLinks, LinksResponse, CHAVE_TELEGRAM, CHAVE_WHATSAPP, TELEGRAM_PADRAO,
    WHATSAPP_PADRAO,
};
use crate::{
    shared::{erros::ApiError, shared_structs::MensagemResponse},
    usuarios::auth_middleware::AuthenticatedUser,
    AppState,
};

/// Rota pública com os links de WhatsApp e Telegram.
#[get("/config/links")]
pub async fn buscar_links(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let whatsapp = data.configuracoes.buscar(CHAVE_WHATSAPP).await?;
    let telegram = data.configuracoes.buscar(CHAVE_TELEGRAM).await?;

    Ok(HttpResponse::Ok().json(LinksResponse {
        whatsapp: whatsapp.unwrap_or_else(|| WHATSAPP_PADRAO.to_string()),
        telegram: telegram.unwrap_or_else(|| TELEGRAM_PADRAO.to_string()),
    }))
}

#[put("/config/links")]
pub async fn atualizar_links(
    data: web::Data<AppState>,
    usuario: AuthenticatedUser,
    item: web::Json<AtualizacaoLinks>,
) -> Result<HttpResponse, ApiError> {
    let pares = item.into_inner().em_pares()?;
    let chaves: Vec<String> = pares.iter().map(|(chave, _)| chave.clone()).collect();

    data.configuracoes.salvar(pares).await?;

    info!(?chaves, user_id = %usuario.user_id, "links atualizados");

    Ok(HttpResponse::Ok().json(MensagemResponse::new("Links atualizados com sucesso")))
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header::AUTHORIZATION, StatusCode},
        test::{call_service, read_body_json, TestRequest},
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::{
        configuracoes::configuracao_repository::MockConfiguracaoRepository,
        test_helpers::{app_de_teste, bearer_de_teste, EstadoTeste},
    };

    #[actix_web::test]
    async fn test_links_com_valores_padrao() {
        let mut repo = MockConfiguracaoRepository::new();
        repo.expect_buscar()
            .withf(|chave| chave == CHAVE_WHATSAPP)
            .once()
            .returning(|_| Ok(Some("https://wa.me/5511999999999".to_string())));
        repo.expect_buscar()
            .withf(|chave| chave == CHAVE_TELEGRAM)
            .once()
            .returning(|_| Ok(None));

        let app = app_de_teste!(EstadoTeste::default().com_configuracoes(repo).build()).await;
        let res = call_service(&app, TestRequest::get().uri("/config/links").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);

        let corpo: LinksResponse = read_body_json(res).await;
        assert_eq!(corpo.whatsapp, "https://wa.me/5511999999999");
        assert_eq!(corpo.telegram, TELEGRAM_PADRAO);
    }

    #[actix_web::test]
    async fn test_atualizar_links() -> TestResult {
        let mut repo = MockConfiguracaoRepository::new();
        repo.expect_salvar()
            .once()
            .withf(|pares| {
                pares.len() == 1
                    && pares[0].0 == CHAVE_TELEGRAM
                    && pares[0].1 == "https://t.me/ofertasdopit"
            })
            .returning(|_| Ok(()));

        let app = app_de_teste!(EstadoTeste::default().com_configuracoes(repo).build()).await;
        let req = TestRequest::put()
            .uri("/config/links")
            .insert_header((AUTHORIZATION, bearer_de_teste()?))
            .set_json(json!({ "whatsapp": "", "telegram": "https://t.me/ofertasdopit" }))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let corpo: MensagemResponse = read_body_json(res).await;
        assert_eq!(corpo.message, "Links atualizados com sucesso");

        Ok(())
    }

    #[actix_web::test]
    async fn test_atualizar_sem_links_retorna_400() -> TestResult {
        let mut repo = MockConfiguracaoRepository::new();
        repo.expect_salvar().never();

        let app = app_de_teste!(EstadoTeste::default().com_configuracoes(repo).build()).await;
        let req = TestRequest::put()
            .uri("/config/links")
            .insert_header((AUTHORIZATION, bearer_de_teste()?))
            .set_json(json!({}))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[actix_web::test]
    async fn test_atualizar_sem_token_retorna_401() {
        let mut repo = MockConfiguracaoRepository::new();
        repo.expect_salvar().never();

        let app = app_de_teste!(EstadoTeste::default().com_configuracoes(repo).build()).await;
        let req = TestRequest::put()
            .uri("/config/links")
            .set_json(json!({ "whatsapp": "https://wa.me/1" }))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
