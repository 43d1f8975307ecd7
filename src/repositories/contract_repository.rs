use crate::models::contract::Contract;
use crate::services::contract_lifecycle::{ActivatePlan, CancelPlan, ClosePlan};
use crate::utils::errors::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Contract>, AppError> {
        let contract = sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding contract: {}", e)))?;

        Ok(contract)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Contract>, AppError> {
        let contracts = sqlx::query_as::<_, Contract>(
            "SELECT * FROM contracts WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing contracts: {}", e)))?;

        Ok(contracts)
    }

    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        contract: &Contract,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO contracts
                (id, company_id, company_car_id, client_id, start_date, end_date, actual_end_date,
                 total_amount, currency, status,
                 full_insurance, full_insurance_price, baby_seat, baby_seat_price,
                 island_trip, island_trip_price, krabi_trip, krabi_trip_price,
                 pickup_district_id, pickup_delivery_price, pickup_hotel, pickup_room,
                 return_district_id, return_delivery_price, return_hotel, return_room,
                 start_mileage, end_mileage, fuel_level, cleanliness, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18,
                    $19, $20, $21, $22, $23, $24, $25, $26,
                    $27, $28, $29, $30, $31, $32)
            "#,
        )
        .bind(contract.id)
        .bind(contract.company_id)
        .bind(contract.company_car_id)
        .bind(contract.client_id)
        .bind(contract.start_date)
        .bind(contract.end_date)
        .bind(contract.actual_end_date)
        .bind(contract.total_amount)
        .bind(&contract.currency)
        .bind(contract.status)
        .bind(contract.full_insurance)
        .bind(contract.full_insurance_price)
        .bind(contract.baby_seat)
        .bind(contract.baby_seat_price)
        .bind(contract.island_trip)
        .bind(contract.island_trip_price)
        .bind(contract.krabi_trip)
        .bind(contract.krabi_trip_price)
        .bind(contract.pickup_district_id)
        .bind(contract.pickup_delivery_price)
        .bind(&contract.pickup_hotel)
        .bind(&contract.pickup_room)
        .bind(contract.return_district_id)
        .bind(contract.return_delivery_price)
        .bind(&contract.return_hotel)
        .bind(&contract.return_room)
        .bind(contract.start_mileage)
        .bind(contract.end_mileage)
        .bind(contract.fuel_level)
        .bind(contract.cleanliness)
        .bind(&contract.notes)
        .bind(contract.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating contract: {}", e)))?;

        Ok(())
    }

    pub async fn apply_activate(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        plan: &ActivatePlan,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE contracts SET status = $2, start_mileage = $3 WHERE id = $1",
        )
        .bind(plan.contract_id)
        .bind(plan.new_status)
        .bind(plan.start_mileage)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error activating contract: {}", e)))?;

        Ok(())
    }

    pub async fn apply_close(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        plan: &ClosePlan,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE contracts
            SET status = $2, actual_end_date = $3, end_mileage = $4,
                fuel_level = $5, cleanliness = $6, notes = COALESCE($7, notes)
            WHERE id = $1
            "#,
        )
        .bind(plan.contract_id)
        .bind(plan.new_status)
        .bind(plan.actual_end_date)
        .bind(plan.end_mileage)
        .bind(plan.fuel_level)
        .bind(plan.cleanliness)
        .bind(&plan.notes)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error closing contract: {}", e)))?;

        Ok(())
    }

    pub async fn apply_cancel(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        plan: &CancelPlan,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE contracts SET status = $2, notes = COALESCE($3, notes) WHERE id = $1",
        )
        .bind(plan.contract_id)
        .bind(plan.new_status)
        .bind(&plan.reason)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error cancelling contract: {}", e)))?;

        Ok(())
    }
}
