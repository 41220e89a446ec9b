// src/test_helpers.rs

use std::{str::FromStr, sync::Arc};

use actix_web::web;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    categorias::{
        categoria_repository::MockCategoriaRepository, categoria_structs::Categoria,
        slug::gerar_slug,
    },
    configuracoes::configuracao_repository::MockConfiguracaoRepository,
    promocoes::{
        desconto::calcular_percentual_desconto, promocao_repository::MockPromocaoRepository,
        promocao_structs::Promocao,
    },
    usuarios::{
        jwt::{JwtConfig, TokenError},
        usuario_repository::MockUsuarioRepository,
        usuario_structs::{Usuario, ROLE_ADMIN},
    },
    AppState,
};

pub const SEGREDO_DE_TESTE: &str = "segredo-de-teste";
pub const SENHA_DE_TESTE: &str = "secure";
pub const EMAIL_DE_TESTE: &str = "admin@ofertasdopit.com";

/// Monta o `AppState` dos testes. Repositórios não informados são mocks sem
/// expectativas: qualquer chamada inesperada faz o teste falhar.
#[derive(Default)]
pub struct EstadoTeste {
    categorias: Option<MockCategoriaRepository>,
    promocoes: Option<MockPromocaoRepository>,
    usuarios: Option<MockUsuarioRepository>,
    configuracoes: Option<MockConfiguracaoRepository>,
    hash_referencia: Option<String>,
}

impl EstadoTeste {
    pub fn com_categorias(mut self, repo: MockCategoriaRepository) -> Self {
        self.categorias = Some(repo);
        self
    }

    pub fn com_promocoes(mut self, repo: MockPromocaoRepository) -> Self {
        self.promocoes = Some(repo);
        self
    }

    pub fn com_usuarios(mut self, repo: MockUsuarioRepository) -> Self {
        self.usuarios = Some(repo);
        self
    }

    pub fn com_configuracoes(mut self, repo: MockConfiguracaoRepository) -> Self {
        self.configuracoes = Some(repo);
        self
    }

    pub fn com_hash_referencia(mut self, hash: &str) -> Self {
        self.hash_referencia = Some(hash.to_string());
        self
    }

    pub fn jwt() -> JwtConfig {
        JwtConfig::new(SEGREDO_DE_TESTE, 24)
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            categorias: Arc::new(self.categorias.unwrap_or_default()),
            promocoes: Arc::new(self.promocoes.unwrap_or_default()),
            usuarios: Arc::new(self.usuarios.unwrap_or_default()),
            configuracoes: Arc::new(self.configuracoes.unwrap_or_default()),
            jwt: Self::jwt(),
            hash_referencia: self.hash_referencia.unwrap_or_else(|| {
                bcrypt::hash(SENHA_DE_TESTE, 4).expect("hash de referência dos testes")
            }),
        })
    }
}

fn usuario_com_hash(senha_hash: String) -> Usuario {
    Usuario {
        id: Uuid::new_v4(),
        email: EMAIL_DE_TESTE.to_string(),
        senha_hash,
        role: ROLE_ADMIN.to_string(),
        created_at: Utc::now(),
    }
}

/// Administrador cuja senha é `SENHA_DE_TESTE` (hash de custo mínimo).
pub fn usuario_de_teste() -> Result<Usuario, bcrypt::BcryptError> {
    Ok(usuario_com_hash(bcrypt::hash(SENHA_DE_TESTE, 4)?))
}

pub fn token_de_teste() -> Result<String, TokenError> {
    EstadoTeste::jwt().emitir(&usuario_com_hash(String::new()))
}

/// Valor pronto para o cabeçalho `Authorization`.
pub fn bearer_de_teste() -> Result<String, TokenError> {
    Ok(format!("Bearer {}", token_de_teste()?))
}

pub fn categoria_de_teste(nome: &str) -> Categoria {
    Categoria {
        id: Uuid::new_v4(),
        nome: nome.to_string(),
        slug: gerar_slug(nome),
        created_at: Utc::now(),
    }
}

/// Promoção ativa em "Eletrônicos" com os preços dados.
pub fn promocao_de_teste(original: &str, oferta: &str) -> Result<Promocao, ParseBigDecimalError> {
    let preco_original = BigDecimal::from_str(original)?;
    let preco_oferta = BigDecimal::from_str(oferta)?;
    let categoria = categoria_de_teste("Eletrônicos");

    Ok(Promocao {
        id: Uuid::new_v4(),
        titulo: "Smart TV 50\"".to_string(),
        imagem_produto: "https://img.pit.com/tv.png".to_string(),
        percentual_desconto: calcular_percentual_desconto(&preco_original, &preco_oferta),
        preco_original,
        preco_oferta,
        link_oferta: "https://loja.com/tv".to_string(),
        categoria_id: categoria.id,
        ativo: true,
        data_postagem: Utc::now(),
        categoria_nome: Some(categoria.nome),
        categoria_slug: Some(categoria.slug),
    })
}

/// Inicializa a aplicação de teste com as mesmas rotas, CORS e serviço
/// padrão do servidor, sem prefixo.
macro_rules! app_de_teste {
    ($estado:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($estado)
                .wrap($crate::shared::cors::cabecalhos_cors())
                .configure($crate::rotas::configurar)
                .default_service(actix_web::web::to($crate::shared::cors::rota_padrao)),
        )
    };
}

pub(crate) use app_de_teste;
