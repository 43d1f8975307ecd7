use crate::models::company_settings::CompanySettings;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CompanySettingsRepository {
    pool: PgPool,
}

impl CompanySettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, company_id: Uuid) -> Result<Option<CompanySettings>, AppError> {
        let settings = sqlx::query_as::<_, CompanySettings>(
            "SELECT * FROM company_settings WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading company settings: {}", e)))?;

        Ok(settings)
    }
}
