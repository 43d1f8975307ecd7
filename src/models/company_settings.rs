//! Modelo de CompanySettings
//!
//! Precios por empresa de los extras del contrato. Lo mantiene el
//! módulo de administración (fuera de este servicio); aquí solo se lee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Configuración de precios de extras - mapea a la tabla company_settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanySettings {
    pub company_id: Uuid,
    pub baby_seat_price_per_day: Decimal,
    pub island_trip_price: Decimal,
    pub krabi_trip_price: Decimal,
    pub full_insurance_min_price: Decimal,
}
