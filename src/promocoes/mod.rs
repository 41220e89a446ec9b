// src/promocoes/mod.rs

// Declara o submódulo que contém as definições das structs de promoções
pub mod promocao_structs;
// Declara o submódulo que contém as funções de rota relacionadas a promoções
pub mod promocao_router;
pub mod promocao_repository;
// Cálculo do percentual de desconto e regras de preço
pub mod desconto;
