use crate::models::district::District;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct DistrictRepository {
    pool: PgPool,
}

impl DistrictRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<District>, AppError> {
        let district = sqlx::query_as::<_, District>("SELECT * FROM districts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding district: {}", e)))?;

        Ok(district)
    }
}
