// src/promocoes/desconto.rs

use bigdecimal::{BigDecimal, ToPrimitive, Zero};

use crate::shared::erros::ApiError;

/// Casas decimais com que os preços são armazenados (`NUMERIC(12, 2)`).
const CASAS_PRECO: i64 = 2;
/// Escala aceita na entrada. Números JSON chegam com até ~20 casas.
const ESCALA_MAXIMA: i64 = 32;
/// Cerca de 48 dígitos decimais no inteiro não escalado.
const BITS_MAXIMOS: u64 = 160;

const PRECO_FORA_DA_FAIXA: &str = "O preço deve estar entre 0,01 e 9.999.999.999,99.";

/// Percentual de desconto inteiro: `round((original - oferta) / original * 100)`,
/// arredondando meio para cima. Preço original não positivo resulta em 0.
pub fn calcular_percentual_desconto(original: &BigDecimal, oferta: &BigDecimal) -> i32 {
    if original <= &BigDecimal::zero() {
        return 0;
    }

    let dois = BigDecimal::from(2);
    let numerador = (original - oferta) * BigDecimal::from(100);

    // floor(n / d + 1/2) == floor((2n + d) / 2d)
    let arredondado = ((&numerador * &dois) + original) / (original * &dois);

    piso(&arredondado).to_i32().unwrap_or(0)
}

fn piso(valor: &BigDecimal) -> BigDecimal {
    let truncado = valor.with_scale(0);

    if &truncado > valor {
        truncado - BigDecimal::from(1)
    } else {
        truncado
    }
}

/// Arredonda o preço para centavos, meio para cima.
///
/// Expoentes e quantidades de dígitos fora da faixa de um preço são recusados
/// antes de qualquer conta: `1e-2000000` viraria um inteiro de megabytes.
pub fn normalizar_preco(preco: &BigDecimal) -> Result<BigDecimal, ApiError> {
    let (digitos, escala) = preco.as_bigint_and_exponent();

    if !(-ESCALA_MAXIMA..=ESCALA_MAXIMA).contains(&escala) || digitos.bits() > BITS_MAXIMOS {
        return Err(ApiError::validacao(PRECO_FORA_DA_FAIXA));
    }

    let cem = BigDecimal::from(100);
    let meio = BigDecimal::from(1) / BigDecimal::from(2);

    Ok((piso(&(preco * &cem + meio)) / cem).with_scale(CASAS_PRECO))
}

/// Maior valor que cabe em `NUMERIC(12, 2)`: 9999999999.99.
fn preco_maximo() -> BigDecimal {
    BigDecimal::new(999_999_999_999_i64.into(), CASAS_PRECO)
}

/// Regras de preço de uma promoção: ambos positivos, dentro da coluna e a
/// oferta não maior que o original. Espera preços já normalizados.
pub fn validar_precos(original: &BigDecimal, oferta: &BigDecimal) -> Result<(), ApiError> {
    if original <= &BigDecimal::zero() {
        return Err(ApiError::validacao("O preço original deve ser maior que zero."));
    }

    if oferta <= &BigDecimal::zero() {
        return Err(ApiError::validacao("O preço da oferta deve ser maior que zero."));
    }

    if original > &preco_maximo() || oferta > &preco_maximo() {
        return Err(ApiError::validacao(PRECO_FORA_DA_FAIXA));
    }

    if oferta > original {
        return Err(ApiError::validacao(
            "O preço da oferta não pode ser maior que o preço original.",
        ));
    }

    Ok(())
}
