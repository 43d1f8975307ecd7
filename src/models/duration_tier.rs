//! Modelo de RentalDurationTier
//!
//! Este módulo contiene el struct del tramo de duración de alquiler.
//! Los tramos de una empresa deben cubrir [1, ∞) días sin huecos ni
//! solapamientos; esa regla vive en `services::tier_coverage`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tramo de duración - mapea a la tabla rental_duration_tiers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RentalDurationTier {
    pub id: Uuid,
    pub company_id: Uuid,
    pub range_name: String,
    pub min_days: i32,
    /// None = tramo final sin límite superior
    pub max_days: Option<i32>,
    pub price_multiplier: Decimal,
    pub discount_label: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RentalDurationTier {
    /// Verificar si un número de días cae dentro del tramo
    pub fn covers(&self, days: i32) -> bool {
        days >= self.min_days && self.max_days.map_or(true, |max| days <= max)
    }
}
