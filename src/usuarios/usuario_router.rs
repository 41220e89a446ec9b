// src/usuarios/usuario_router.rs

use actix_web::{post, web, HttpResponse};
use bcrypt::verify;
use tracing::{info, warn};
use validator::Validate;

use super::usuario_structs::{AuthResponse, LoginRequest};
use crate::{
    shared::erros::{ApiError, ResultExt},
    AppState,
};

/// Rota para login de usuário.
///
/// E-mail desconhecido e senha errada devolvem a mesma resposta 401.
#[post("/auth/login")]
pub async fn login_usuario(
    data: web::Data<AppState>,
    login_request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let login = login_request.into_inner();
    login.validate()?;

    let email = login.email.trim();

    // 1. Buscar o usuário pelo e-mail
    let usuario = data.usuarios.buscar_por_email(email).await?;

    // 2. Verificar a senha fora das threads do servidor (bcrypt é custoso).
    // E-mail desconhecido também paga um bcrypt, contra o hash de referência.
    let senha = login.senha;
    let hash = match &usuario {
        Some(usuario) => usuario.senha_hash.clone(),
        None => data.hash_referencia.clone(),
    };
    let senha_confere = web::block(move || verify(senha, &hash))
        .await
        .ou_500("falha ao agendar verificação de senha")?
        .ou_500("falha ao verificar senha")?;

    let Some(usuario) = usuario else {
        warn!(email, "login com e-mail desconhecido");
        return Err(ApiError::CredenciaisInvalidas);
    };

    if !senha_confere {
        warn!(email, "login com senha incorreta");
        return Err(ApiError::CredenciaisInvalidas);
    }

    // 3. Gerar o token
    let access_token = data.jwt.emitir(&usuario).ou_500("falha ao emitir token")?;

    info!(user_id = %usuario.id, "login bem-sucedido");

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        token_type: "bearer".to_string(),
        user: usuario.into(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body_json, TestRequest},
        App,
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::{
        shared::{erros::json_config, shared_structs::ErroResponse},
        test_helpers::{usuario_de_teste, EstadoTeste, SENHA_DE_TESTE},
        usuarios::usuario_repository::MockUsuarioRepository,
    };

    async fn chamar(
        repo: MockUsuarioRepository,
        corpo: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = init_service(
            App::new()
                .app_data(EstadoTeste::default().com_usuarios(repo).build())
                .app_data(json_config())
                .service(login_usuario),
        )
        .await;

        let req = TestRequest::post().uri("/auth/login").set_json(corpo).to_request();

        call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_login_com_sucesso() -> TestResult {
        let usuario = usuario_de_teste()?;
        let id = usuario.id;

        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email()
            .once()
            .withf(|email| email == "admin@ofertasdopit.com")
            .return_once(move |_| Ok(Some(usuario)));
        repo.expect_criar().never();

        let corpo = json!({ "email": "admin@ofertasdopit.com", "senha": SENHA_DE_TESTE });
        let res = chamar(repo, corpo).await;

        assert_eq!(res.status(), StatusCode::OK);

        let corpo: AuthResponse = read_body_json(res).await;
        let claims = EstadoTeste::jwt().validar(&corpo.access_token)?;

        assert_eq!(corpo.token_type, "bearer");
        assert_eq!(corpo.user.id, id);
        assert_eq!(claims.sub, id);

        Ok(())
    }

    #[actix_web::test]
    async fn test_senha_incorreta_retorna_401() -> TestResult {
        let usuario = usuario_de_teste()?;

        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email()
            .once()
            .return_once(move |_| Ok(Some(usuario)));

        let corpo = json!({ "email": "admin@ofertasdopit.com", "senha": "errada" });
        let res = chamar(repo, corpo).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let corpo: ErroResponse = read_body_json(res).await;
        assert_eq!(corpo.error, "Email ou senha incorretos");

        Ok(())
    }

    #[actix_web::test]
    async fn test_email_desconhecido_retorna_401() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email().once().return_once(|_| Ok(None));

        let res = chamar(repo, json!({ "email": "ninguem@pit.com", "senha": "x" })).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_email_desconhecido_com_senha_de_referencia_retorna_401() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email().once().return_once(|_| Ok(None));

        // o hash de referência dos testes é da SENHA_DE_TESTE
        let corpo = json!({ "email": "ninguem@pit.com", "senha": SENHA_DE_TESTE });
        let res = chamar(repo, corpo).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let corpo: ErroResponse = read_body_json(res).await;
        assert_eq!(corpo.error, "Email ou senha incorretos");
    }

    #[actix_web::test]
    async fn test_email_desconhecido_tambem_verifica_bcrypt() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email().once().return_once(|_| Ok(None));

        let app = init_service(
            App::new()
                .app_data(
                    EstadoTeste::default()
                        .com_usuarios(repo)
                        .com_hash_referencia("nao-e-bcrypt")
                        .build(),
                )
                .app_data(json_config())
                .service(login_usuario),
        )
        .await;
        let req = TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": "ninguem@pit.com", "senha": "x" }))
            .to_request();
        let res = call_service(&app, req).await;

        // hash inválido só é notado se o bcrypt rodar
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_campos_ausentes_retornam_400() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_buscar_por_email().never();

        let res = chamar(repo, json!({ "email": "admin@ofertasdopit.com" })).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let corpo: ErroResponse = read_body_json(res).await;
        assert_eq!(corpo.error, "Email e senha são obrigatórios");
    }
}
