//! Tabla de temporadas
//!
//! Lookup de solo lectura sobre las temporadas configuradas. Si ninguna
//! temporada cubre una fecha (o no hay temporadas configuradas) aplica la
//! temporada estándar con coeficiente 1.0.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::season::SeasonDefinition;

/// Nombre de la temporada implícita de línea base
pub const STANDARD_SEASON_NAME: &str = "standard";

/// Temporada tal y como se muestra en la matriz de cotización
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRate {
    pub name: String,
    pub price_coefficient: Decimal,
}

/// Tabla de temporadas, inyectada explícitamente en el cálculo de precios
#[derive(Debug, Clone, Default)]
pub struct SeasonTable {
    seasons: Vec<SeasonDefinition>,
}

impl SeasonTable {
    pub fn new(mut seasons: Vec<SeasonDefinition>) -> Self {
        seasons.sort_by_key(|season| season.position);
        Self { seasons }
    }

    /// Coeficiente aplicable a una fecha; 1.0 si ninguna temporada la cubre
    pub fn coefficient_for(&self, date: NaiveDate) -> Decimal {
        self.seasons
            .iter()
            .find(|season| season.contains(date))
            .map(|season| season.price_coefficient)
            .unwrap_or(Decimal::ONE)
    }

    /// Temporadas a mostrar en la matriz de cotización.
    ///
    /// Si hay más de `max_seasons` se muestran las de mayor coeficiente,
    /// con el orden de inserción como desempate. Sin temporadas
    /// configuradas se muestra solo la estándar.
    pub fn display_seasons(&self, max_seasons: usize) -> Vec<SeasonRate> {
        if self.seasons.is_empty() {
            return vec![SeasonRate {
                name: STANDARD_SEASON_NAME.to_string(),
                price_coefficient: Decimal::ONE,
            }];
        }

        let mut ranked: Vec<&SeasonDefinition> = self.seasons.iter().collect();
        if ranked.len() > max_seasons {
            // sort estable: empates quedan en orden de inserción
            ranked.sort_by(|a, b| b.price_coefficient.cmp(&a.price_coefficient));
            ranked.truncate(max_seasons);
        }

        ranked
            .into_iter()
            .map(|season| SeasonRate {
                name: season.name.clone(),
                price_coefficient: season.price_coefficient,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn season(
        name: &str,
        start: (i32, i32),
        end: (i32, i32),
        coefficient: &str,
        position: i32,
    ) -> SeasonDefinition {
        SeasonDefinition {
            id: Uuid::new_v4(),
            name: name.to_string(),
            start_month: start.0,
            start_day: start.1,
            end_month: end.0,
            end_day: end.1,
            price_coefficient: Decimal::from_str_exact(coefficient).unwrap(),
            position,
            created_at: Utc::now(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_empty_table_defaults_to_standard() {
        let table = SeasonTable::default();
        assert_eq!(table.coefficient_for(date(2025, 7, 15)), Decimal::ONE);

        let display = table.display_seasons(4);
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].name, STANDARD_SEASON_NAME);
    }

    #[test]
    fn test_lookup_within_season() {
        let table = SeasonTable::new(vec![season("high", (12, 1), (2, 28), "1.3", 0)]);
        // Rango que cruza el fin de año
        assert_eq!(
            table.coefficient_for(date(2025, 1, 10)),
            Decimal::from_str_exact("1.3").unwrap()
        );
        assert_eq!(table.coefficient_for(date(2025, 6, 10)), Decimal::ONE);
    }

    #[test]
    fn test_display_ranked_by_coefficient_with_insertion_tie_break() {
        let table = SeasonTable::new(vec![
            season("low", (5, 1), (10, 31), "0.8", 0),
            season("high", (12, 1), (2, 28), "1.3", 1),
            season("mid-a", (3, 1), (3, 31), "1.1", 2),
            season("mid-b", (4, 1), (4, 30), "1.1", 3),
            season("base", (11, 1), (11, 30), "1.0", 4),
        ]);

        let display = table.display_seasons(3);
        let names: Vec<&str> = display.iter().map(|rate| rate.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid-a", "mid-b"]);
    }

    #[test]
    fn test_display_keeps_insertion_order_when_under_limit() {
        let table = SeasonTable::new(vec![
            season("low", (5, 1), (10, 31), "0.8", 0),
            season("high", (12, 1), (2, 28), "1.3", 1),
        ]);

        let display = table.display_seasons(4);
        let names: Vec<&str> = display.iter().map(|rate| rate.name.as_str()).collect();
        assert_eq!(names, vec!["low", "high"]);
    }
}
