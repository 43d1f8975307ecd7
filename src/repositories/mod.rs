//! Repositorios de acceso a datos
//!
//! Structs planos sobre el pool de PostgreSQL. Las escrituras del ciclo
//! de vida reciben la transacción abierta por el controller; el resto
//! opera directamente sobre el pool.

pub mod audit_repository;
pub mod car_repository;
pub mod company_settings_repository;
pub mod contract_repository;
pub mod district_repository;
pub mod payment_repository;
pub mod season_repository;
pub mod tier_repository;
