//! Controllers de la API
//!
//! Orquestación: cargan las entradas, llaman al motor puro en
//! `services` y persisten los planes resultantes en una transacción.

pub mod booking_controller;
pub mod contract_controller;
pub mod pricing_controller;
pub mod tier_controller;
