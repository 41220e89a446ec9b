// src/usuarios/mod.rs

// Declara o submódulo que contém as definições das structs de usuários
pub mod usuario_structs;
// Declara o submódulo que contém as funções de rota relacionadas a usuários
pub mod usuario_router;
// Acesso à tabela de usuários
pub mod usuario_repository;
// Emissão e validação dos tokens
pub mod jwt;
// Extrator de autenticação das rotas protegidas
pub mod auth_middleware;
