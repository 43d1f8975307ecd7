//! Redondeo monetario
//!
//! Regla única de redondeo para todas las líneas de cargo y totales:
//! 2 decimales, mitad hacia afuera del cero. Toda cifra que se muestra
//! o se cobra pasa por aquí para que cotización y cobro sean reproducibles.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimales de la unidad menor de la moneda
const DECIMAL_PLACES: u32 = 2;

/// Redondear un importe monetario a la unidad menor
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec("10.005")), dec("10.01"));
        assert_eq!(round_money(dec("-10.005")), dec("-10.01"));
        assert_eq!(round_money(dec("10.004")), dec("10.00"));
    }

    #[test]
    fn test_integers_unchanged() {
        assert_eq!(round_money(dec("6500")), dec("6500"));
    }
}
