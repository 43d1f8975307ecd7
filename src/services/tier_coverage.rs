//! Validación de cobertura de tramos de duración
//!
//! Los tramos de una empresa, ordenados por `min_days`, deben partir los
//! enteros positivos sin huecos ni solapamientos: el primero empieza en el
//! día 1, cada `max_days + 1` coincide con el `min_days` siguiente y solo
//! el último tramo puede ser ilimitado. Este validador corre sobre la
//! lista completa ya fusionada con el cambio candidato en cada create,
//! update, delete y seed.

/// Rango mínimo de un tramo para validar cobertura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSpan {
    pub min_days: i32,
    pub max_days: Option<i32>,
}

impl TierSpan {
    pub fn new(min_days: i32, max_days: Option<i32>) -> Self {
        Self { min_days, max_days }
    }
}

/// Resultado de la validación de cobertura
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl CoverageResult {
    fn ok() -> Self {
        Self { valid: true, message: None }
    }

    fn invalid(message: String) -> Self {
        Self { valid: false, message: Some(message) }
    }
}

/// Validar que los tramos cubren [1, ∞) sin huecos ni solapamientos.
///
/// Una lista vacía es válida: ninguna empresa está obligada a configurar
/// tramos, pero si configura alguno la cobertura debe ser total.
pub fn validate_coverage(tiers: &[TierSpan]) -> CoverageResult {
    if tiers.is_empty() {
        return CoverageResult::ok();
    }

    let mut sorted: Vec<TierSpan> = tiers.to_vec();
    sorted.sort_by_key(|tier| tier.min_days);

    for tier in &sorted {
        if tier.min_days < 1 {
            return CoverageResult::invalid(format!(
                "tier starting at day {} is invalid: min_days must be >= 1",
                tier.min_days
            ));
        }
        if let Some(max_days) = tier.max_days {
            if max_days < tier.min_days {
                return CoverageResult::invalid(format!(
                    "tier {}-{} is invalid: max_days is lower than min_days",
                    tier.min_days, max_days
                ));
            }
        }
    }

    if sorted[0].min_days != 1 {
        return CoverageResult::invalid(format!(
            "tiers must start at day 1: day 1 to day {} is not covered",
            sorted[0].min_days - 1
        ));
    }

    for pair in sorted.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        let max_days = match current.max_days {
            Some(max_days) => max_days,
            None => {
                return CoverageResult::invalid(format!(
                    "only the last tier may be unbounded: the tier starting at day {} has no max_days but is not the last one",
                    current.min_days
                ));
            }
        };

        if next.min_days <= max_days {
            return CoverageResult::invalid(format!(
                "tiers overlap at day {}",
                next.min_days
            ));
        }
        if next.min_days > max_days + 1 {
            return CoverageResult::invalid(format!(
                "gap in coverage: day {} is not covered",
                max_days + 1
            ));
        }
    }

    if let Some(last) = sorted.last() {
        if let Some(max_days) = last.max_days {
            return CoverageResult::invalid(format!(
                "last tier must be unbounded: days beyond {} are not covered",
                max_days
            ));
        }
    }

    CoverageResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(min: i32, max: Option<i32>) -> TierSpan {
        TierSpan::new(min, max)
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_coverage(&[]).valid);
    }

    #[test]
    fn test_canonical_partition_is_valid() {
        let tiers = [span(1, Some(3)), span(4, Some(7)), span(8, None)];
        let result = validate_coverage(&tiers);
        assert!(result.valid, "{:?}", result.message);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let tiers = [span(8, None), span(1, Some(3)), span(4, Some(7))];
        assert!(validate_coverage(&tiers).valid);
    }

    #[test]
    fn test_first_tier_must_start_at_day_one() {
        let tiers = [span(2, Some(7)), span(8, None)];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains("day 1"));
    }

    #[test]
    fn test_overlap_is_rejected_citing_boundary_day() {
        let tiers = [span(1, Some(3)), span(4, Some(7)), span(5, None)];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains("day 5"));
    }

    #[test]
    fn test_gap_is_rejected_citing_missing_day() {
        let tiers = [span(1, Some(3)), span(5, None)];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains("day 4"));
    }

    #[test]
    fn test_max_lower_than_min_is_rejected() {
        let tiers = [span(1, Some(3)), span(4, Some(2)), span(8, None)];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
    }

    #[test]
    fn test_second_unbounded_tier_is_rejected_citing_day_eight() {
        let tiers = [span(1, Some(7)), span(8, None), span(8, Some(14))];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains('8'));
    }

    #[test]
    fn test_bounded_last_tier_is_rejected() {
        let tiers = [span(1, Some(3)), span(4, Some(90))];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains("unbounded"));
    }

    #[test]
    fn test_removing_middle_tier_reopens_gap() {
        // Tramos 1-30 / 31-60 / 61-∞ sin el del medio
        let tiers = [span(1, Some(30)), span(61, None)];
        let result = validate_coverage(&tiers);
        assert!(!result.valid);
        assert!(result.message.unwrap().contains("day 31"));
    }
}
