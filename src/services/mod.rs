//! Services module
//!
//! Este módulo contiene la lógica de negocio pura del motor de precios y
//! ciclo de vida: sin acceso a almacenamiento, testeable de forma aislada.
//! Los controllers cargan las entradas, llaman aquí y persisten los planes.

pub mod contract_lifecycle;
pub mod pricing_service;
pub mod season_table;
pub mod tier_coverage;
