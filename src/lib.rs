//! Motor de precios y ciclo de vida de contratos de alquiler de coches
//!
//! La lógica de negocio (cobertura de tramos, cálculo de precios,
//! máquina de estados del contrato) vive en `services` como funciones
//! puras; `controllers` las orquesta sobre PostgreSQL y `routes` expone
//! la API HTTP.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo de la API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/tier", routes::tier_routes::create_tier_router())
        .nest("/api/pricing", routes::pricing_routes::create_pricing_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/contract", routes::contract_routes::create_contract_router())
        .layer(cors_middleware())
        .with_state(state)
}
