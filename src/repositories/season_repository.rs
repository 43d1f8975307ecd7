use crate::models::season::SeasonDefinition;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct SeasonRepository {
    pool: PgPool,
}

impl SeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SeasonDefinition>, AppError> {
        let seasons = sqlx::query_as::<_, SeasonDefinition>(
            "SELECT * FROM season_definitions ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing seasons: {}", e)))?;

        Ok(seasons)
    }
}
