//! DTOs de tramos de duración
//!
//! En el wire `max_days = 0` es el centinela de "sin límite"; en los
//! modelos internos eso es `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::duration_tier::RentalDurationTier;

/// Request para crear un tramo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTierRequest {
    #[validate(length(min = 1, max = 100))]
    pub range_name: String,

    #[validate(range(min = 1))]
    pub min_days: i32,

    /// 0 = sin límite superior
    #[validate(range(min = 0))]
    pub max_days: i32,

    pub price_multiplier: Decimal,

    #[validate(length(max = 100))]
    pub discount_label: Option<String>,
}

impl CreateTierRequest {
    /// Traducir el centinela 0 a None
    pub fn max_days_normalized(&self) -> Option<i32> {
        if self.max_days == 0 {
            None
        } else {
            Some(self.max_days)
        }
    }
}

/// Request para actualizar un tramo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTierRequest {
    #[validate(length(min = 1, max = 100))]
    pub range_name: Option<String>,

    #[validate(range(min = 1))]
    pub min_days: Option<i32>,

    /// 0 = sin límite superior
    #[validate(range(min = 0))]
    pub max_days: Option<i32>,

    pub price_multiplier: Option<Decimal>,

    #[validate(length(max = 100))]
    pub discount_label: Option<String>,
}

/// Response de tramo para la API
#[derive(Debug, Serialize)]
pub struct TierResponse {
    pub id: String,
    pub range_name: String,
    pub min_days: i32,
    pub max_days: Option<i32>,
    pub price_multiplier: String,
    pub discount_label: Option<String>,
    pub created_at: String,
}

impl From<RentalDurationTier> for TierResponse {
    fn from(tier: RentalDurationTier) -> Self {
        Self {
            id: tier.id.to_string(),
            range_name: tier.range_name,
            min_days: tier.min_days,
            max_days: tier.max_days,
            price_multiplier: tier.price_multiplier.to_string(),
            discount_label: tier.discount_label,
            created_at: tier.created_at.to_rfc3339(),
        }
    }
}
