// src/saude/mod.rs

// Verificação de saúde e mensagem da raiz da API
pub mod saude_router;
