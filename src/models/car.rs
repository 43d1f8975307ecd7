//! Modelo de CompanyCar
//!
//! Este módulo contiene el struct del coche de empresa. El campo `status`
//! solo lo muta el ciclo de vida del contrato.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del coche - mapea al ENUM car_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "car_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Booked,
    Rented,
    Maintenance,
}

/// Coche de empresa - mapea a la tabla company_cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyCar {
    pub id: Uuid,
    pub company_id: Uuid,
    pub price_per_day: Decimal,
    pub deposit: Decimal,
    pub status: CarStatus,
    pub created_at: DateTime<Utc>,
}
