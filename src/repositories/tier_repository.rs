use crate::models::duration_tier::RentalDurationTier;
use crate::utils::errors::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct TierRepository {
    pool: PgPool,
}

impl TierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalDurationTier>, AppError> {
        let tier = sqlx::query_as::<_, RentalDurationTier>(
            "SELECT * FROM rental_duration_tiers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding tier: {}", e)))?;

        Ok(tier)
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<RentalDurationTier>, AppError> {
        let tiers = sqlx::query_as::<_, RentalDurationTier>(
            "SELECT * FROM rental_duration_tiers WHERE company_id = $1 ORDER BY min_days",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing tiers: {}", e)))?;

        Ok(tiers)
    }

    /// Lista de tramos dentro de una transacción, bloqueando las filas de
    /// la empresa para que la validación de cobertura y la escritura vean
    /// el mismo conjunto.
    pub async fn list_by_company_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
    ) -> Result<Vec<RentalDurationTier>, AppError> {
        let tiers = sqlx::query_as::<_, RentalDurationTier>(
            "SELECT * FROM rental_duration_tiers WHERE company_id = $1 ORDER BY min_days FOR UPDATE",
        )
        .bind(company_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing tiers: {}", e)))?;

        Ok(tiers)
    }

    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tier: &RentalDurationTier,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO rental_duration_tiers
                (id, company_id, range_name, min_days, max_days, price_multiplier, discount_label, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(tier.id)
        .bind(tier.company_id)
        .bind(&tier.range_name)
        .bind(tier.min_days)
        .bind(tier.max_days)
        .bind(tier.price_multiplier)
        .bind(&tier.discount_label)
        .bind(tier.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating tier: {}", e)))?;

        Ok(())
    }

    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tier: &RentalDurationTier,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE rental_duration_tiers
            SET range_name = $2, min_days = $3, max_days = $4, price_multiplier = $5, discount_label = $6
            WHERE id = $1
            "#,
        )
        .bind(tier.id)
        .bind(&tier.range_name)
        .bind(tier.min_days)
        .bind(tier.max_days)
        .bind(tier.price_multiplier)
        .bind(&tier.discount_label)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating tier: {}", e)))?;

        Ok(())
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM rental_duration_tiers WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting tier: {}", e)))?;

        Ok(())
    }

    pub async fn delete_by_company(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM rental_duration_tiers WHERE company_id = $1")
            .bind(company_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error clearing tiers: {}", e)))?;

        Ok(())
    }
}
