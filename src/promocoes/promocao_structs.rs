// src/promocoes/promocao_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::desconto::{calcular_percentual_desconto, normalizar_preco, validar_precos};
use crate::shared::erros::ApiError;

/// Quantidade máxima de promoções devolvidas pela listagem.
pub const LIMITE_LISTAGEM: i64 = 100;

fn ativo_padrao() -> bool {
    true
}

/// Estrutura para receber uma nova promoção na requisição POST.
/// Qualquer `percentualDesconto` enviado pelo cliente é ignorado.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NovaPromocao {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub titulo: String,
    #[validate(url(message = "A imagem do produto deve ser uma URL válida."))]
    pub imagem_produto: String,
    pub preco_original: BigDecimal,
    pub preco_oferta: BigDecimal,
    #[validate(url(message = "O link da oferta deve ser uma URL válida."))]
    pub link_oferta: String,
    #[serde(rename = "categoria_id")]
    pub categoria_id: Uuid,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
}

/// Atualização parcial: campos ausentes mantêm o valor armazenado.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoPromocao {
    #[validate(length(min = 1, message = "O título não pode ser vazio."))]
    pub titulo: Option<String>,
    #[validate(url(message = "A imagem do produto deve ser uma URL válida."))]
    pub imagem_produto: Option<String>,
    pub preco_original: Option<BigDecimal>,
    pub preco_oferta: Option<BigDecimal>,
    #[validate(url(message = "O link da oferta deve ser uma URL válida."))]
    pub link_oferta: Option<String>,
    #[serde(rename = "categoria_id")]
    pub categoria_id: Option<Uuid>,
    pub ativo: Option<bool>,
}

/// Colunas graváveis de uma promoção, já com o desconto calculado.
#[derive(Debug, Clone, PartialEq)]
pub struct DadosPromocao {
    pub titulo: String,
    pub imagem_produto: String,
    pub preco_original: BigDecimal,
    pub preco_oferta: BigDecimal,
    pub percentual_desconto: i32,
    pub link_oferta: String,
    pub categoria_id: Uuid,
    pub ativo: bool,
    pub data_postagem: DateTime<Utc>,
}

impl DadosPromocao {
    /// Normaliza os preços, valida e recalcula o desconto.
    fn com_precos(mut self, original: &BigDecimal, oferta: &BigDecimal) -> Result<Self, ApiError> {
        let original = normalizar_preco(original)?;
        let oferta = normalizar_preco(oferta)?;

        validar_precos(&original, &oferta)?;

        self.percentual_desconto = calcular_percentual_desconto(&original, &oferta);
        self.preco_original = original;
        self.preco_oferta = oferta;

        Ok(self)
    }
}

impl NovaPromocao {
    pub fn into_dados(self, data_postagem: DateTime<Utc>) -> Result<DadosPromocao, ApiError> {
        let titulo = self.titulo.trim().to_string();
        if titulo.is_empty() {
            return Err(ApiError::validacao("O título é obrigatório."));
        }

        DadosPromocao {
            titulo,
            imagem_produto: self.imagem_produto,
            preco_original: BigDecimal::default(),
            preco_oferta: BigDecimal::default(),
            percentual_desconto: 0,
            link_oferta: self.link_oferta,
            categoria_id: self.categoria_id,
            ativo: self.ativo,
            data_postagem,
        }
        .com_precos(&self.preco_original, &self.preco_oferta)
    }
}

/// Estrutura que representa uma promoção lida do banco, com o nome e o slug
/// da categoria vindos do JOIN.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Promocao {
    pub id: Uuid,
    pub titulo: String,
    pub imagem_produto: String,
    pub preco_original: BigDecimal,
    pub preco_oferta: BigDecimal,
    pub percentual_desconto: i32,
    pub link_oferta: String,
    pub categoria_id: Uuid,
    pub ativo: bool,
    pub data_postagem: DateTime<Utc>,
    pub categoria_nome: Option<String>,
    pub categoria_slug: Option<String>,
}

impl Promocao {
    /// Aplica uma atualização parcial. O desconto é sempre recalculado a partir
    /// dos preços resultantes; um preço ausente assume o valor armazenado.
    pub fn aplicar(&self, atualizacao: AtualizacaoPromocao) -> Result<DadosPromocao, ApiError> {
        let titulo = match atualizacao.titulo {
            Some(titulo) if titulo.trim().is_empty() => {
                return Err(ApiError::validacao("O título não pode ser vazio."));
            }
            Some(titulo) => titulo.trim().to_string(),
            None => self.titulo.clone(),
        };

        let original = atualizacao.preco_original.unwrap_or_else(|| self.preco_original.clone());
        let oferta = atualizacao.preco_oferta.unwrap_or_else(|| self.preco_oferta.clone());

        DadosPromocao {
            titulo,
            imagem_produto: atualizacao
                .imagem_produto
                .unwrap_or_else(|| self.imagem_produto.clone()),
            preco_original: BigDecimal::default(),
            preco_oferta: BigDecimal::default(),
            percentual_desconto: 0,
            link_oferta: atualizacao.link_oferta.unwrap_or_else(|| self.link_oferta.clone()),
            categoria_id: atualizacao.categoria_id.unwrap_or(self.categoria_id),
            ativo: atualizacao.ativo.unwrap_or(self.ativo),
            data_postagem: self.data_postagem,
        }
        .com_precos(&original, &oferta)
    }
}

/// Ordenações aceitas por `ordenar_por`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ordenacao {
    #[default]
    DataRecente,
    MaiorDesconto,
    MenorDesconto,
    MaiorPreco,
    MenorPreco,
}

impl Ordenacao {
    /// Valores desconhecidos caem na ordenação padrão (mais recentes primeiro).
    pub fn from_param(valor: Option<&str>) -> Self {
        match valor.map(str::trim) {
            Some("maior_desconto") => Self::MaiorDesconto,
            Some("menor_desconto") => Self::MenorDesconto,
            Some("maior_preco") => Self::MaiorPreco,
            Some("menor_preco") => Self::MenorPreco,
            _ => Self::DataRecente,
        }
    }

    /// Cláusula ORDER BY correspondente. Empates ficam com a mais recente.
    pub fn clausula_sql(self) -> &'static str {
        match self {
            Self::DataRecente => "p.data_postagem DESC",
            Self::MaiorDesconto => "p.percentual_desconto DESC, p.data_postagem DESC",
            Self::MenorDesconto => "p.percentual_desconto ASC, p.data_postagem DESC",
            Self::MaiorPreco => "p.preco_oferta DESC, p.data_postagem DESC",
            Self::MenorPreco => "p.preco_oferta ASC, p.data_postagem DESC",
        }
    }
}

/// Parâmetros de consulta de `GET /promocoes`, como chegam na URL.
#[derive(Debug, Default, Deserialize)]
pub struct PromocoesQuery {
    pub categoria_id: Option<String>,
    pub ativo: Option<String>,
    pub ordenar_por: Option<String>,
}

/// Filtro já interpretado. `ativo: None` lista promoções ativas e inativas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiltroPromocoes {
    pub categoria_id: Option<Uuid>,
    pub ativo: Option<bool>,
    pub ordenacao: Ordenacao,
}

impl TryFrom<PromocoesQuery> for FiltroPromocoes {
    type Error = ApiError;

    /// `ativo` ausente ou `true` filtra as ativas, `false` as inativas e
    /// `todos` desliga o filtro. `categoria_id` vazio é ignorado.
    fn try_from(query: PromocoesQuery) -> Result<Self, Self::Error> {
        let categoria_id = match query.categoria_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(valor) => Some(
                Uuid::parse_str(valor)
                    .map_err(|_| ApiError::validacao("categoria_id deve ser um UUID válido."))?,
            ),
        };

        let ativo = match query.ativo.as_deref().map(str::trim) {
            Some("false") => Some(false),
            Some("todos") => None,
            _ => Some(true),
        };

        Ok(Self {
            categoria_id,
            ativo,
            ordenacao: Ordenacao::from_param(query.ordenar_por.as_deref()),
        })
    }
}

/// Preços trafegam como número JSON, não como string decimal.
mod preco_json {
    use bigdecimal::BigDecimal;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(preco: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        let valor: f64 = preco.to_string().parse().map_err(S::Error::custom)?;

        serializer.serialize_f64(valor)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        BigDecimal::deserialize(deserializer).map_err(D::Error::custom)
    }
}

/// Estrutura para a resposta da API. Campos em camelCase, exceto os de categoria.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromocaoResponse {
    pub id: Uuid,
    pub titulo: String,
    pub imagem_produto: String,
    #[serde(with = "preco_json")]
    pub preco_original: BigDecimal,
    #[serde(with = "preco_json")]
    pub preco_oferta: BigDecimal,
    pub percentual_desconto: i32,
    pub link_oferta: String,
    #[serde(rename = "categoria_id")]
    pub categoria_id: Uuid,
    pub ativo: bool,
    pub data_postagem: DateTime<Utc>,
    #[serde(rename = "categoria_nome", default, skip_serializing_if = "Option::is_none")]
    pub categoria_nome: Option<String>,
    #[serde(rename = "categoria_slug", default, skip_serializing_if = "Option::is_none")]
    pub categoria_slug: Option<String>,
}

impl From<Promocao> for PromocaoResponse {
    fn from(p: Promocao) -> Self {
        Self {
            id: p.id,
            titulo: p.titulo,
            imagem_produto: p.imagem_produto,
            preco_original: p.preco_original,
            preco_oferta: p.preco_oferta,
            percentual_desconto: p.percentual_desconto,
            link_oferta: p.link_oferta,
            categoria_id: p.categoria_id,
            ativo: p.ativo,
            data_postagem: p.data_postagem,
            categoria_nome: p.categoria_nome,
            categoria_slug: p.categoria_slug,
        }
    }
}
