// src/seed.rs

use actix_web::{error::BlockingError, web};
use bcrypt::{hash, DEFAULT_COST};
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::{
    categorias::categoria_structs::Categoria,
    shared::erros::RepositorioError,
    usuarios::usuario_structs::{NovoUsuario, ROLE_ADMIN},
    AppState,
};

/// Categorias (nome, slug) criadas quando a tabela está vazia. Os slugs são
/// fixos porque o site monta links com eles.
pub const CATEGORIAS_PADRAO: [(&str, &str); 6] = [
    ("Eletrônicos", "eletronicos"),
    ("Informática", "informatica"),
    ("Moda", "moda"),
    ("Casa e Jardim", "casa-jardim"),
    ("Esportes", "esportes"),
    ("Livros", "livros"),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Repositorio(#[from] RepositorioError),

    #[error("falha ao gerar hash da senha: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("falha ao agendar hash da senha: {0}")]
    Bloqueio(#[from] BlockingError),
}

/// Hash bcrypt de uma senha aleatória, verificado no login quando o e-mail
/// não existe. Mesmo custo dos hashes reais.
pub async fn gerar_hash_referencia() -> Result<String, SeedError> {
    let senha = Uuid::new_v4().to_string();

    Ok(web::block(move || hash(senha, DEFAULT_COST)).await??)
}

/// Dados iniciais aplicados na subida, depois das migrações.
pub async fn semear(estado: &AppState, admin: Option<(&str, &str)>) -> Result<(), SeedError> {
    if let Some((email, senha)) = admin {
        semear_admin(estado, email, senha, DEFAULT_COST).await?;
    }

    semear_categorias(estado).await
}

async fn semear_admin(
    estado: &AppState,
    email: &str,
    senha: &str,
    custo: u32,
) -> Result<(), SeedError> {
    if estado.usuarios.buscar_por_email(email).await?.is_some() {
        return Ok(());
    }

    let senha = senha.to_string();
    let senha_hash = web::block(move || hash(senha, custo)).await??;

    let usuario = estado
        .usuarios
        .criar(NovoUsuario {
            email: email.to_string(),
            senha_hash,
            role: ROLE_ADMIN.to_string(),
        })
        .await?;

    info!(user_id = %usuario.id, email, "usuário administrador criado");

    Ok(())
}

async fn semear_categorias(estado: &AppState) -> Result<(), SeedError> {
    if estado.categorias.contar().await? > 0 {
        return Ok(());
    }

    for (nome, slug) in CATEGORIAS_PADRAO {
        estado
            .categorias
            .criar(Categoria {
                id: Uuid::new_v4(),
                nome: nome.to_string(),
                slug: slug.to_string(),
                created_at: Utc::now(),
            })
            .await?;
    }

    info!(quantidade = CATEGORIAS_PADRAO.len(), "categorias padrão criadas");

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        categorias::categoria_repository::MockCategoriaRepository,
        test_helpers::{usuario_de_teste, EstadoTeste},
        usuarios::usuario_repository::MockUsuarioRepository,
    };

    #[actix_web::test]
    async fn test_cria_admin_e_categorias_no_banco_vazio() -> TestResult {
        let mut usuarios = MockUsuarioRepository::new();
        usuarios.expect_buscar_por_email().once().returning(|_| Ok(None));
        usuarios
            .expect_criar()
            .once()
            .withf(|novo| {
                novo.email == "admin@pit.com"
                    && novo.role == ROLE_ADMIN
                    && bcrypt::verify("segredo", &novo.senha_hash).unwrap_or(false)
            })
            .returning(|_| usuario_de_teste().map_err(|_| RepositorioError::Duplicado));

        let mut categorias = MockCategoriaRepository::new();
        categorias.expect_contar().once().returning(|| Ok(0));
        categorias
            .expect_criar()
            .times(CATEGORIAS_PADRAO.len())
            .returning(Ok);

        let estado = EstadoTeste::default()
            .com_usuarios(usuarios)
            .com_categorias(categorias)
            .build();

        semear_admin(&estado, "admin@pit.com", "segredo", 4).await?;
        semear_categorias(&estado).await?;

        Ok(())
    }

    #[actix_web::test]
    async fn test_nada_muda_quando_ja_existe() -> TestResult {
        let mut usuarios = MockUsuarioRepository::new();
        usuarios
            .expect_buscar_por_email()
            .once()
            .returning(|_| usuario_de_teste().map(Some).map_err(|_| RepositorioError::Duplicado));
        usuarios.expect_criar().never();

        let mut categorias = MockCategoriaRepository::new();
        categorias.expect_contar().once().returning(|| Ok(3));
        categorias.expect_criar().never();

        let estado = EstadoTeste::default()
            .com_usuarios(usuarios)
            .com_categorias(categorias)
            .build();

        semear(&estado, Some(("admin@pit.com", "segredo"))).await?;

        Ok(())
    }

    #[actix_web::test]
    async fn test_sem_admin_configurado_so_semeia_categorias() -> TestResult {
        let mut categorias = MockCategoriaRepository::new();
        categorias.expect_contar().once().returning(|| Ok(0));
        categorias.expect_criar().times(6).returning(Ok);

        let estado = EstadoTeste::default().com_categorias(categorias).build();

        semear(&estado, None).await?;

        Ok(())
    }

    #[actix_web::test]
    async fn test_categorias_padrao_usam_slugs_fixos() -> TestResult {
        let mut categorias = MockCategoriaRepository::new();
        categorias.expect_contar().once().returning(|| Ok(0));
        categorias
            .expect_criar()
            .once()
            .withf(|c| c.nome == "Casa e Jardim" && c.slug == "casa-jardim")
            .returning(Ok);
        categorias
            .expect_criar()
            .withf(|c| c.nome != "Casa e Jardim")
            .times(5)
            .returning(Ok);

        let estado = EstadoTeste::default().com_categorias(categorias).build();

        semear_categorias(&estado).await?;

        Ok(())
    }
}
