//! DTOs de la matriz de cotización

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query params de la cotización
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// Días usados para valorar el tramo sin límite superior
    pub days: Option<i32>,
}

/// Celda de la matriz: un tramo valorado dentro de una temporada
#[derive(Debug, Serialize)]
pub struct TierQuoteDto {
    pub range_name: String,
    pub min_days: i32,
    pub max_days: Option<i32>,
    pub discount_label: Option<String>,
    pub daily_price: String,
    pub total_for_tier: String,
}

/// Fila de la matriz: una temporada con todos sus tramos
#[derive(Debug, Serialize)]
pub struct SeasonQuoteDto {
    pub season_name: String,
    pub price_coefficient: String,
    pub tiers: Vec<TierQuoteDto>,
}

/// Response de la matriz de cotización de un coche
#[derive(Debug, Serialize)]
pub struct QuoteMatrixResponse {
    pub car_id: Uuid,
    pub base_price_per_day: String,
    pub currency: String,
    pub seasons: Vec<SeasonQuoteDto>,
}
