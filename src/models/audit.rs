//! Modelo de AuditRecord
//!
//! Registro antes/después de cada cambio de estado relevante.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Registro de auditoría - mapea a la tabla audit_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditRecord {
    pub id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub action: String,
    pub before: serde_json::Value,
    pub after: serde_json::Value,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}
