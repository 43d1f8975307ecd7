use crate::services::contract_lifecycle::AuditEntry;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrar un cambio antes/después en la misma transacción que lo
    /// produce.
    pub async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: &AuditEntry,
        created_by: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO audit_records
                (id, entity_type, entity_id, action, before, after, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(entry.action)
        .bind(&entry.before)
        .bind(&entry.after)
        .bind(created_by)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error recording audit entry: {}", e)))?;

        Ok(())
    }
}
