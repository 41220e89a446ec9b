// src/estatisticas/mod.rs

// Contadores do painel administrativo
pub mod estatisticas_router;
