//! Modelo de District
//!
//! Distritos de entrega/recogida con su tarifa plana. Diccionario
//! mantenido fuera de este servicio; aquí solo se consulta la tarifa.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Distrito - mapea a la tabla districts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct District {
    pub id: Uuid,
    pub name: String,
    pub delivery_price: Decimal,
}
