use crate::dto::common_dto::ApiResponse;
use crate::dto::tier_dto::{CreateTierRequest, TierResponse, UpdateTierRequest};
use crate::models::duration_tier::RentalDurationTier;
use crate::repositories::tier_repository::TierRepository;
use crate::services::tier_coverage::{validate_coverage, TierSpan};
use crate::utils::errors::AppError;
use chrono::Utc;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    /// Juego de tramos por defecto que carga el seed
    static ref DEFAULT_TIER_SEED: Vec<(&'static str, i32, Option<i32>, &'static str, &'static str)> = vec![
        ("1-3 days", 1, Some(3), "1.00", "standard rate"),
        ("4-7 days", 4, Some(7), "0.95", "5% off"),
        ("8-14 days", 8, Some(14), "0.90", "10% off"),
        ("15-29 days", 15, Some(29), "0.85", "15% off"),
        ("30+ days", 30, None, "0.80", "20% off"),
    ];
}

pub struct TierController {
    repository: TierRepository,
}

impl TierController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TierRepository::new(pool),
        }
    }

    pub async fn list(&self, company_id: Uuid) -> Result<Vec<TierResponse>, AppError> {
        let tiers = self.repository.list_by_company(company_id).await?;
        Ok(tiers.into_iter().map(TierResponse::from).collect())
    }

    /// Crear un tramo. La cobertura se valida con el candidato ya
    /// fusionado en la lista completa; si falla no se escribe nada.
    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateTierRequest,
    ) -> Result<ApiResponse<TierResponse>, AppError> {
        request.validate()?;
        if request.price_multiplier <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "price_multiplier must be positive".to_string(),
            ));
        }

        let candidate = RentalDurationTier {
            id: Uuid::new_v4(),
            company_id,
            range_name: request.range_name.clone(),
            min_days: request.min_days,
            max_days: request.max_days_normalized(),
            price_multiplier: request.price_multiplier,
            discount_label: request.discount_label.clone(),
            created_at: Utc::now(),
        };

        let mut tx = self
            .repository
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let current = self
            .repository
            .list_by_company_for_update(&mut tx, company_id)
            .await?;

        let mut spans: Vec<TierSpan> = current
            .iter()
            .map(|tier| TierSpan::new(tier.min_days, tier.max_days))
            .collect();
        spans.push(TierSpan::new(candidate.min_days, candidate.max_days));

        let coverage = validate_coverage(&spans);
        if !coverage.valid {
            return Err(AppError::ValidationError(
                coverage.message.unwrap_or_else(|| "invalid tier coverage".to_string()),
            ));
        }

        self.repository.insert(&mut tx, &candidate).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing tier: {}", e)))?;

        tracing::info!("📊 Tramo creado para empresa {}: {}", company_id, candidate.range_name);

        Ok(ApiResponse::success_with_message(
            TierResponse::from(candidate),
            "Tier created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        request: UpdateTierRequest,
    ) -> Result<ApiResponse<TierResponse>, AppError> {
        request.validate()?;
        if let Some(multiplier) = request.price_multiplier {
            if multiplier <= Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "price_multiplier must be positive".to_string(),
                ));
            }
        }

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tier not found".to_string()))?;

        if current.company_id != company_id {
            return Err(AppError::Forbidden(
                "Tier does not belong to this company".to_string(),
            ));
        }

        let updated = RentalDurationTier {
            id: current.id,
            company_id: current.company_id,
            range_name: request.range_name.unwrap_or(current.range_name),
            min_days: request.min_days.unwrap_or(current.min_days),
            max_days: match request.max_days {
                // 0 en el wire = quitar el límite superior
                Some(0) => None,
                Some(max_days) => Some(max_days),
                None => current.max_days,
            },
            price_multiplier: request.price_multiplier.unwrap_or(current.price_multiplier),
            discount_label: request.discount_label.or(current.discount_label),
            created_at: current.created_at,
        };

        let mut tx = self
            .repository
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let stored = self
            .repository
            .list_by_company_for_update(&mut tx, company_id)
            .await?;

        let spans: Vec<TierSpan> = stored
            .iter()
            .map(|tier| {
                if tier.id == id {
                    TierSpan::new(updated.min_days, updated.max_days)
                } else {
                    TierSpan::new(tier.min_days, tier.max_days)
                }
            })
            .collect();

        let coverage = validate_coverage(&spans);
        if !coverage.valid {
            return Err(AppError::ValidationError(
                coverage.message.unwrap_or_else(|| "invalid tier coverage".to_string()),
            ));
        }

        self.repository.update(&mut tx, &updated).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing tier: {}", e)))?;

        Ok(ApiResponse::success_with_message(
            TierResponse::from(updated),
            "Tier updated successfully".to_string(),
        ))
    }

    /// Borrar un tramo. Un borrado que reabre un hueco se rechaza igual
    /// que un create/update inválido y la lista queda intacta.
    pub async fn delete(&self, company_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let tier = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tier not found".to_string()))?;

        if tier.company_id != company_id {
            return Err(AppError::Forbidden(
                "Tier does not belong to this company".to_string(),
            ));
        }

        let mut tx = self
            .repository
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let stored = self
            .repository
            .list_by_company_for_update(&mut tx, company_id)
            .await?;

        let spans: Vec<TierSpan> = stored
            .iter()
            .filter(|stored_tier| stored_tier.id != id)
            .map(|stored_tier| TierSpan::new(stored_tier.min_days, stored_tier.max_days))
            .collect();

        let coverage = validate_coverage(&spans);
        if !coverage.valid {
            return Err(AppError::ValidationError(format!(
                "deleting this tier would break coverage: {}",
                coverage.message.unwrap_or_default()
            )));
        }

        self.repository.delete(&mut tx, id).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing delete: {}", e)))?;

        Ok(())
    }

    /// Cargar el juego de tramos por defecto, reemplazando el existente
    pub async fn seed(&self, company_id: Uuid) -> Result<Vec<TierResponse>, AppError> {
        let now = Utc::now();
        let tiers: Vec<RentalDurationTier> = DEFAULT_TIER_SEED
            .iter()
            .map(|(name, min_days, max_days, multiplier, label)| RentalDurationTier {
                id: Uuid::new_v4(),
                company_id,
                range_name: name.to_string(),
                min_days: *min_days,
                max_days: *max_days,
                price_multiplier: Decimal::from_str_exact(multiplier)
                    .expect("seed multiplier is a valid decimal"),
                discount_label: Some(label.to_string()),
                created_at: now,
            })
            .collect();

        let spans: Vec<TierSpan> = tiers
            .iter()
            .map(|tier| TierSpan::new(tier.min_days, tier.max_days))
            .collect();
        let coverage = validate_coverage(&spans);
        if !coverage.valid {
            return Err(AppError::Internal(format!(
                "default tier seed does not cover all durations: {}",
                coverage.message.unwrap_or_default()
            )));
        }

        let mut tx = self
            .repository
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        self.repository.delete_by_company(&mut tx, company_id).await?;
        for tier in &tiers {
            self.repository.insert(&mut tx, tier).await?;
        }
        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing seed: {}", e)))?;

        tracing::info!("🌱 Tramos por defecto cargados para empresa {}", company_id);

        Ok(tiers.into_iter().map(TierResponse::from).collect())
    }
}
