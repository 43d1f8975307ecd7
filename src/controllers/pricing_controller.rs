use crate::dto::pricing_dto::{QuoteMatrixResponse, SeasonQuoteDto, TierQuoteDto};
use crate::middleware::requester::Requester;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::season_repository::SeasonRepository;
use crate::repositories::tier_repository::TierRepository;
use crate::services::pricing_service::build_quote_matrix;
use crate::services::season_table::SeasonTable;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Días con los que se valora el tramo sin límite si el caller no indica otros
const DEFAULT_UNBOUNDED_DAYS: i32 = 30;

pub struct PricingController {
    cars: CarRepository,
    tiers: TierRepository,
    seasons: SeasonRepository,
}

impl PricingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            tiers: TierRepository::new(pool.clone()),
            seasons: SeasonRepository::new(pool),
        }
    }

    /// Matriz de cotización (temporada × tramo) de un coche.
    ///
    /// Informativa: el total que se cobra lo calcula la creación de la
    /// reserva con la misma tarifa efectiva.
    pub async fn quote(
        &self,
        requester: Requester,
        car_id: Uuid,
        unbounded_days: Option<i32>,
        max_seasons: usize,
        currency: String,
    ) -> Result<QuoteMatrixResponse, AppError> {
        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        if !requester.can_access(car.company_id) {
            return Err(AppError::Forbidden(
                "Car does not belong to this company".to_string(),
            ));
        }

        let unbounded_days = unbounded_days.unwrap_or(DEFAULT_UNBOUNDED_DAYS);
        if unbounded_days < 1 {
            return Err(AppError::ValidationError(
                "days must be at least 1".to_string(),
            ));
        }

        let tiers = self.tiers.list_by_company(car.company_id).await?;
        let season_table = SeasonTable::new(self.seasons.list().await?);

        let matrix = build_quote_matrix(
            car.price_per_day,
            &season_table,
            &tiers,
            unbounded_days,
            max_seasons,
        );

        let seasons = matrix
            .into_iter()
            .map(|row| SeasonQuoteDto {
                season_name: row.season.name,
                price_coefficient: row.season.price_coefficient.to_string(),
                tiers: row
                    .tiers
                    .into_iter()
                    .map(|tier| TierQuoteDto {
                        range_name: tier.range_name,
                        min_days: tier.min_days,
                        max_days: tier.max_days,
                        discount_label: tier.discount_label,
                        daily_price: tier.daily_price.to_string(),
                        total_for_tier: tier.total_for_tier.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Ok(QuoteMatrixResponse {
            car_id: car.id,
            base_price_per_day: car.price_per_day.to_string(),
            currency,
            seasons,
        })
    }
}
