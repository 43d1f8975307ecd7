//! Modelo de Contract
//!
//! El contrato de alquiler, desde la reserva hasta la devolución.
//! Se crea en `draft`, nunca se borra; `closed` y `cancelled` son
//! estados terminales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del contrato - mapea al ENUM contract_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "contract_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Active,
    Closed,
    Cancelled,
}

impl ContractStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ContractStatus::Closed | ContractStatus::Cancelled)
    }
}

/// Nivel de combustible en octavos - mapea al ENUM fuel_level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "fuel_level", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FuelLevel {
    Full,
    SevenEighths,
    ThreeQuarters,
    FiveEighths,
    Half,
    ThreeEighths,
    Quarter,
    OneEighth,
    Empty,
}

/// Limpieza del coche a la devolución - mapea al ENUM cleanliness
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "cleanliness", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Cleanliness {
    Clean,
    Dirty,
}

/// Contrato de alquiler - mapea a la tabla contracts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contract {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_car_id: Uuid,
    pub client_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Fecha real de devolución, fijada al cerrar
    pub actual_end_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub currency: String,
    pub status: ContractStatus,
    pub full_insurance: bool,
    pub full_insurance_price: Decimal,
    pub baby_seat: bool,
    pub baby_seat_price: Decimal,
    pub island_trip: bool,
    pub island_trip_price: Decimal,
    pub krabi_trip: bool,
    pub krabi_trip_price: Decimal,
    pub pickup_district_id: Option<Uuid>,
    pub pickup_delivery_price: Decimal,
    pub pickup_hotel: Option<String>,
    pub pickup_room: Option<String>,
    pub return_district_id: Option<Uuid>,
    pub return_delivery_price: Decimal,
    pub return_hotel: Option<String>,
    pub return_room: Option<String>,
    pub start_mileage: Option<Decimal>,
    pub end_mileage: Option<Decimal>,
    pub fuel_level: Option<FuelLevel>,
    pub cleanliness: Option<Cleanliness>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
