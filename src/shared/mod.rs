// src/shared/mod.rs

// Structs de resposta comuns a todos os módulos
pub mod shared_structs;
// Erro único da API e sua tradução para respostas HTTP
pub mod erros;
// Cabeçalhos CORS e rota padrão (preflight e 404)
pub mod cors;
