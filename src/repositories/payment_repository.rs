use crate::models::payment::{PaymentRecord, PaymentStatus};
use crate::services::contract_lifecycle::NewPayment;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_contract(&self, contract_id: Uuid) -> Result<Vec<PaymentRecord>, AppError> {
        let payments = sqlx::query_as::<_, PaymentRecord>(
            "SELECT * FROM payment_records WHERE contract_id = $1 ORDER BY created_at",
        )
        .bind(contract_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing payments: {}", e)))?;

        Ok(payments)
    }

    /// Insertar el lote de pagos del cierre; append-only, dentro de la
    /// transacción del cierre.
    pub async fn insert_batch(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        contract_id: Uuid,
        payments: &[NewPayment],
        created_by: Uuid,
    ) -> Result<(), AppError> {
        for payment in payments {
            sqlx::query(
                r#"
                INSERT INTO payment_records
                    (id, contract_id, payment_type_id, amount, currency, method, status, created_by, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(contract_id)
            .bind(payment.payment_type_id)
            .bind(payment.amount)
            .bind(&payment.currency)
            .bind(payment.method)
            .bind(PaymentStatus::Completed)
            .bind(created_by)
            .bind(Utc::now())
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error inserting payment: {}", e)))?;
        }

        Ok(())
    }
}
