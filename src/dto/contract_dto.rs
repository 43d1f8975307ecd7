//! DTOs del ciclo de vida del contrato

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::contract::{Cleanliness, Contract, ContractStatus, FuelLevel};
use crate::models::payment::{PaymentMethod, PaymentRecord, PaymentStatus};

/// Línea de pago enviada al cerrar el contrato
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLineRequest {
    /// Signado: positivo = ingreso, negativo = gasto
    pub payment_type_id: i32,
    pub amount: Decimal,
    /// Moneda de la línea; por defecto la del contrato
    pub currency: Option<String>,
    pub method: PaymentMethod,
}

/// Request para activar un contrato (entrega del coche)
#[derive(Debug, Deserialize, Validate)]
pub struct ActivateContractRequest {
    pub start_mileage: Decimal,
}

/// Request para cerrar un contrato (devolución del coche)
#[derive(Debug, Deserialize, Validate)]
pub struct CloseContractRequest {
    pub actual_end_date: DateTime<Utc>,
    pub end_mileage: Decimal,
    pub fuel_level: FuelLevel,
    pub cleanliness: Cleanliness,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[serde(default)]
    pub payments: Vec<PaymentLineRequest>,
}

/// Request para cancelar un contrato
#[derive(Debug, Deserialize, Validate)]
pub struct CancelContractRequest {
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

/// Response de pago para la API
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub contract_id: Uuid,
    pub payment_type_id: i32,
    pub amount: String,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        Self {
            id: payment.id,
            contract_id: payment.contract_id,
            payment_type_id: payment.payment_type_id,
            amount: payment.amount.to_string(),
            currency: payment.currency,
            method: payment.method,
            status: payment.status,
            created_at: payment.created_at,
        }
    }
}

/// Response de contrato para la API
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_car_id: Uuid,
    pub client_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub actual_end_date: Option<DateTime<Utc>>,
    pub total_amount: String,
    pub currency: String,
    pub status: ContractStatus,
    pub full_insurance: bool,
    pub full_insurance_price: String,
    pub baby_seat: bool,
    pub baby_seat_price: String,
    pub island_trip: bool,
    pub island_trip_price: String,
    pub krabi_trip: bool,
    pub krabi_trip_price: String,
    pub pickup_district_id: Option<Uuid>,
    pub pickup_delivery_price: String,
    pub pickup_hotel: Option<String>,
    pub pickup_room: Option<String>,
    pub return_district_id: Option<Uuid>,
    pub return_delivery_price: String,
    pub return_hotel: Option<String>,
    pub return_room: Option<String>,
    pub start_mileage: Option<String>,
    pub end_mileage: Option<String>,
    pub fuel_level: Option<FuelLevel>,
    pub cleanliness: Option<Cleanliness>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            company_id: contract.company_id,
            company_car_id: contract.company_car_id,
            client_id: contract.client_id,
            start_date: contract.start_date,
            end_date: contract.end_date,
            actual_end_date: contract.actual_end_date,
            total_amount: contract.total_amount.to_string(),
            currency: contract.currency,
            status: contract.status,
            full_insurance: contract.full_insurance,
            full_insurance_price: contract.full_insurance_price.to_string(),
            baby_seat: contract.baby_seat,
            baby_seat_price: contract.baby_seat_price.to_string(),
            island_trip: contract.island_trip,
            island_trip_price: contract.island_trip_price.to_string(),
            krabi_trip: contract.krabi_trip,
            krabi_trip_price: contract.krabi_trip_price.to_string(),
            pickup_district_id: contract.pickup_district_id,
            pickup_delivery_price: contract.pickup_delivery_price.to_string(),
            pickup_hotel: contract.pickup_hotel,
            pickup_room: contract.pickup_room,
            return_district_id: contract.return_district_id,
            return_delivery_price: contract.return_delivery_price.to_string(),
            return_hotel: contract.return_hotel,
            return_room: contract.return_room,
            start_mileage: contract.start_mileage.map(|m| m.to_string()),
            end_mileage: contract.end_mileage.map(|m| m.to_string()),
            fuel_level: contract.fuel_level,
            cleanliness: contract.cleanliness,
            notes: contract.notes,
            created_at: contract.created_at,
        }
    }
}
