//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod audit;
pub mod car;
pub mod company_settings;
pub mod contract;
pub mod district;
pub mod duration_tier;
pub mod payment;
pub mod season;
