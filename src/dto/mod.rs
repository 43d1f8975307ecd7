//! DTOs de la API
//!
//! Requests y responses serializables; los modelos internos viven en
//! `models` y nunca salen directamente por el wire.

pub mod booking_dto;
pub mod common_dto;
pub mod contract_dto;
pub mod pricing_dto;
pub mod tier_dto;
