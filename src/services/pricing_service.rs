//! Cálculo de precios
//!
//! Funciones puras: ningún acceso a almacenamiento. Hay dos salidas
//! separadas a propósito:
//!
//! - la **matriz de cotización** (informativa), que valora cada par
//!   (temporada, tramo) sobre la tarifa base del coche, y
//! - el **total de reserva** (el que se cobra), calculado con la misma
//!   tarifa efectiva `price_per_day × coeficiente × multiplicador` para
//!   que lo mostrado y lo cobrado nunca diverjan.
//!
//! Todo importe pasa por `utils::money::round_money`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::company_settings::CompanySettings;
use crate::models::duration_tier::RentalDurationTier;
use crate::services::season_table::{SeasonRate, SeasonTable};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::money::round_money;

const SECONDS_PER_DAY: i64 = 86_400;

/// Días facturables entre dos instantes: techo de la duración en días.
/// Una reserva de menos de un día completo cuenta como un día.
pub fn rental_days(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> AppResult<i64> {
    let seconds = (end_date - start_date).num_seconds();
    if seconds <= 0 {
        return Err(AppError::ValidationError(
            "rental must be at least one day: end_date must be after start_date".to_string(),
        ));
    }
    Ok((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY)
}

/// Multiplicador del tramo que cubre la duración dada; 1.0 sin tramos
pub fn tier_multiplier(tiers: &[RentalDurationTier], days: i64) -> Decimal {
    let days = i32::try_from(days).unwrap_or(i32::MAX);
    tiers
        .iter()
        .find(|tier| tier.covers(days))
        .map(|tier| tier.price_multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Entrada del total de reserva
#[derive(Debug)]
pub struct BookingPricingInput<'a> {
    pub price_per_day: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seasons: &'a SeasonTable,
    pub tiers: &'a [RentalDurationTier],
    pub settings: &'a CompanySettings,
    pub full_insurance: bool,
    pub baby_seat: bool,
    pub island_trip: bool,
    pub krabi_trip: bool,
    /// Tarifa plana del distrito de entrega, si se eligió
    pub pickup_delivery: Option<Decimal>,
    /// Tarifa plana del distrito de devolución, si se eligió
    pub return_delivery: Option<Decimal>,
}

/// Desglose del total de reserva; cada línea ya viene redondeada
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPricing {
    pub days: i64,
    pub base: Decimal,
    pub full_insurance_price: Decimal,
    pub baby_seat_price: Decimal,
    pub island_trip_price: Decimal,
    pub krabi_trip_price: Decimal,
    pub pickup_delivery_price: Decimal,
    pub return_delivery_price: Decimal,
    pub total_amount: Decimal,
}

/// Calcular el total autoritativo de una reserva.
///
/// `base = price_per_day × coeficiente(start_date) × multiplicador(días) × días`;
/// los extras diarios escalan por días, las excursiones y las entregas son
/// tarifas planas. El total es la suma exacta de las líneas.
pub fn compute_booking_total(input: BookingPricingInput<'_>) -> AppResult<BookingPricing> {
    let days = rental_days(input.start_date, input.end_date)?;
    let days_dec = Decimal::from(days);

    let coefficient = input.seasons.coefficient_for(input.start_date.date_naive());
    let multiplier = tier_multiplier(input.tiers, days);

    let base = round_money(input.price_per_day * coefficient * multiplier * days_dec);

    let full_insurance_price = if input.full_insurance {
        round_money(input.settings.full_insurance_min_price * days_dec)
    } else {
        Decimal::ZERO
    };
    let baby_seat_price = if input.baby_seat {
        round_money(input.settings.baby_seat_price_per_day * days_dec)
    } else {
        Decimal::ZERO
    };
    let island_trip_price = if input.island_trip {
        round_money(input.settings.island_trip_price)
    } else {
        Decimal::ZERO
    };
    let krabi_trip_price = if input.krabi_trip {
        round_money(input.settings.krabi_trip_price)
    } else {
        Decimal::ZERO
    };

    let pickup_delivery_price = round_money(input.pickup_delivery.unwrap_or(Decimal::ZERO));
    let return_delivery_price = round_money(input.return_delivery.unwrap_or(Decimal::ZERO));

    let total_amount = round_money(
        base + full_insurance_price
            + baby_seat_price
            + island_trip_price
            + krabi_trip_price
            + pickup_delivery_price
            + return_delivery_price,
    );

    Ok(BookingPricing {
        days,
        base,
        full_insurance_price,
        baby_seat_price,
        island_trip_price,
        krabi_trip_price,
        pickup_delivery_price,
        return_delivery_price,
        total_amount,
    })
}

/// Celda de la matriz de cotización
#[derive(Debug, Clone, PartialEq)]
pub struct TierQuote {
    pub range_name: String,
    pub min_days: i32,
    pub max_days: Option<i32>,
    pub discount_label: Option<String>,
    pub daily_price: Decimal,
    pub total_for_tier: Decimal,
}

/// Fila de la matriz: una temporada con todos los tramos valorados
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonQuote {
    pub season: SeasonRate,
    pub tiers: Vec<TierQuote>,
}

/// Construir la matriz de cotización (temporada × tramo).
///
/// `unbounded_days` valora el tramo final sin límite superior.
pub fn build_quote_matrix(
    base_price_per_day: Decimal,
    seasons: &SeasonTable,
    tiers: &[RentalDurationTier],
    unbounded_days: i32,
    max_seasons: usize,
) -> Vec<SeasonQuote> {
    seasons
        .display_seasons(max_seasons)
        .into_iter()
        .map(|season| {
            let rows = tiers
                .iter()
                .map(|tier| {
                    let daily_price = round_money(
                        base_price_per_day * season.price_coefficient * tier.price_multiplier,
                    );
                    let quoted_days = tier.max_days.unwrap_or(unbounded_days);
                    let total_for_tier = round_money(daily_price * Decimal::from(quoted_days));
                    TierQuote {
                        range_name: tier.range_name.clone(),
                        min_days: tier.min_days,
                        max_days: tier.max_days,
                        discount_label: tier.discount_label.clone(),
                        daily_price,
                        total_for_tier,
                    }
                })
                .collect();
            SeasonQuote { season, tiers: rows }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
    }

    fn settings() -> CompanySettings {
        CompanySettings {
            company_id: Uuid::new_v4(),
            baby_seat_price_per_day: dec("150"),
            island_trip_price: dec("2500"),
            krabi_trip_price: dec("1800"),
            full_insurance_min_price: dec("200"),
        }
    }

    fn tier(min: i32, max: Option<i32>, multiplier: &str) -> RentalDurationTier {
        RentalDurationTier {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            range_name: format!("{}+", min),
            min_days: min,
            max_days: max,
            price_multiplier: dec(multiplier),
            discount_label: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rental_days_rounds_up_partial_days() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 4, 15, 0, 0).unwrap();
        assert_eq!(rental_days(start, end).unwrap(), 4);
    }

    #[test]
    fn test_rental_days_rejects_inverted_and_empty_ranges() {
        let start = date(2025, 3, 10);
        assert!(rental_days(start, start).is_err());
        assert!(rental_days(start, date(2025, 3, 1)).is_err());
    }

    #[test]
    fn test_reference_scenario_totals_6500() {
        // 1000/día × 5 días + seguro 200/día + entrega 500 = 6500
        let season_table = SeasonTable::default();
        let pricing = compute_booking_total(BookingPricingInput {
            price_per_day: dec("1000"),
            start_date: date(2025, 3, 1),
            end_date: date(2025, 3, 6),
            seasons: &season_table,
            tiers: &[],
            settings: &settings(),
            full_insurance: true,
            baby_seat: false,
            island_trip: false,
            krabi_trip: false,
            pickup_delivery: Some(dec("500")),
            return_delivery: None,
        })
        .unwrap();

        assert_eq!(pricing.days, 5);
        assert_eq!(pricing.base, dec("5000"));
        assert_eq!(pricing.full_insurance_price, dec("1000"));
        assert_eq!(pricing.pickup_delivery_price, dec("500"));
        assert_eq!(pricing.total_amount, dec("6500"));
    }

    #[test]
    fn test_total_is_exactly_additive() {
        let season_table = SeasonTable::default();
        let pricing = compute_booking_total(BookingPricingInput {
            price_per_day: dec("1200"),
            start_date: date(2025, 6, 1),
            end_date: date(2025, 6, 11),
            seasons: &season_table,
            tiers: &[],
            settings: &settings(),
            full_insurance: true,
            baby_seat: true,
            island_trip: true,
            krabi_trip: true,
            pickup_delivery: Some(dec("300")),
            return_delivery: Some(dec("300")),
        })
        .unwrap();

        let expected = pricing.base
            + pricing.full_insurance_price
            + pricing.baby_seat_price
            + pricing.island_trip_price
            + pricing.krabi_trip_price
            + pricing.pickup_delivery_price
            + pricing.return_delivery_price;
        assert_eq!(pricing.total_amount, expected);

        // Las excursiones son tarifa plana, no escalan por días
        assert_eq!(pricing.island_trip_price, dec("2500"));
        assert_eq!(pricing.krabi_trip_price, dec("1800"));
        // Los extras diarios sí escalan
        assert_eq!(pricing.baby_seat_price, dec("1500"));
    }

    #[test]
    fn test_tier_multiplier_and_season_apply_to_base() {
        let season_table = SeasonTable::default();
        let tiers = [tier(1, Some(3), "1.0"), tier(4, Some(7), "0.95"), tier(8, None, "0.9")];
        let pricing = compute_booking_total(BookingPricingInput {
            price_per_day: dec("1000"),
            start_date: date(2025, 3, 1),
            end_date: date(2025, 3, 6),
            seasons: &season_table,
            tiers: &tiers,
            settings: &settings(),
            full_insurance: false,
            baby_seat: false,
            island_trip: false,
            krabi_trip: false,
            pickup_delivery: None,
            return_delivery: None,
        })
        .unwrap();

        // 5 días caen en el tramo 4-7 con multiplicador 0.95
        assert_eq!(pricing.base, dec("4750"));
        assert_eq!(pricing.total_amount, dec("4750"));
    }

    #[test]
    fn test_quote_matrix_prices_each_season_tier_pair() {
        let season_table = SeasonTable::default();
        let tiers = [tier(1, Some(3), "1.0"), tier(4, Some(7), "0.95"), tier(8, None, "0.9")];
        let matrix = build_quote_matrix(dec("1000"), &season_table, &tiers, 30, 4);

        assert_eq!(matrix.len(), 1);
        let rows = &matrix[0].tiers;
        assert_eq!(rows[0].daily_price, dec("1000"));
        assert_eq!(rows[0].total_for_tier, dec("3000"));
        assert_eq!(rows[1].daily_price, dec("950"));
        assert_eq!(rows[1].total_for_tier, dec("6650"));
        // El tramo ilimitado se valora con los días indicados
        assert_eq!(rows[2].daily_price, dec("900"));
        assert_eq!(rows[2].total_for_tier, dec("27000"));
    }
}
