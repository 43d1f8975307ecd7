//! Modelo de SeasonDefinition
//!
//! Temporadas recurrentes (mes-día a mes-día) con coeficiente de precio.
//! El rango puede cruzar el fin de año (ej. temporada alta nov-feb).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Temporada - mapea a la tabla season_definitions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeasonDefinition {
    pub id: Uuid,
    pub name: String,
    pub start_month: i32,
    pub start_day: i32,
    pub end_month: i32,
    pub end_day: i32,
    /// 1.0 = línea base
    pub price_coefficient: Decimal,
    /// Orden de inserción, usado para desempates
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl SeasonDefinition {
    /// Verificar si una fecha cae dentro de la temporada recurrente
    pub fn contains(&self, date: NaiveDate) -> bool {
        let day_of_year = (date.month() as i32, date.day() as i32);
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);

        if start <= end {
            day_of_year >= start && day_of_year <= end
        } else {
            // Rango que cruza el fin de año
            day_of_year >= start || day_of_year <= end
        }
    }
}
