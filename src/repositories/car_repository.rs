use crate::models::car::{CarStatus, CompanyCar};
use crate::utils::errors::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CompanyCar>, AppError> {
        let car = sqlx::query_as::<_, CompanyCar>("SELECT * FROM company_cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(car)
    }

    /// Cambio de estado del coche; siempre dentro de la transacción del
    /// ciclo de vida para que contrato y coche nunca diverjan.
    pub async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        car_id: Uuid,
        status: CarStatus,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE company_cars SET status = $2 WHERE id = $1")
            .bind(car_id)
            .bind(status)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error updating car status: {}", e)))?;

        Ok(())
    }
}
