// src/categorias/slug.rs

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Gera o identificador de URL de um nome de categoria.
///
/// Minúsculas, sem acentos, apenas `[a-z0-9]` separados por hífens únicos,
/// sem hífen nas pontas: `"Eletrônicos & Informática"` vira
/// `"eletronicos-informatica"`.
pub fn gerar_slug(texto: &str) -> String {
    let mut slug = String::with_capacity(texto.len());
    let mut separador_pendente = false;

    for c in texto.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if separador_pendente && !slug.is_empty() {
                slug.push('-');
            }
            separador_pendente = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            separador_pendente = true;
        }
    }

    slug
}
