// src/categorias/mod.rs

pub mod categoria_structs;
pub mod categoria_router;
pub mod categoria_repository;
// Geração de slugs a partir do nome
pub mod slug;
