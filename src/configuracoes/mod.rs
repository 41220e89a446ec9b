// src/configuracoes/mod.rs

pub mod configuracao_structs;
pub mod configuracao_router;
pub mod configuracao_repository;
