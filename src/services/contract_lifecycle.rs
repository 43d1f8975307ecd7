//! Ciclo de vida del contrato
//!
//! Máquina de estados pura sobre un contrato de alquiler:
//! `draft → active → closed`, con `cancel` alcanzable desde draft/active.
//! `closed` y `cancelled` son terminales.
//!
//! Cada transición se planifica aquí y se ejecuta en el controller dentro
//! de una única transacción: el parche del contrato, el lote de pagos, el
//! cambio de estado del coche y el registro de auditoría se aplican todos
//! o ninguno.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::models::car::{CarStatus, CompanyCar};
use crate::models::contract::{Cleanliness, Contract, ContractStatus, FuelLevel};
use crate::models::payment::PaymentMethod;
use crate::utils::errors::{AppError, AppResult};

/// Transiciones permitidas de la máquina de estados
pub fn can_transition(from: ContractStatus, to: ContractStatus) -> bool {
    use ContractStatus::*;
    matches!(
        (from, to),
        (Draft, Active) | (Draft, Closed) | (Draft, Cancelled) | (Active, Closed) | (Active, Cancelled)
    )
}

/// Registro de auditoría pendiente de persistir
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub entity_type: &'static str,
    pub entity_id: Uuid,
    pub action: &'static str,
    pub before: serde_json::Value,
    pub after: serde_json::Value,
}

/// Verificar que un coche admite una nueva reserva
pub fn ensure_car_available(car: &CompanyCar) -> AppResult<()> {
    if car.status != CarStatus::Available {
        return Err(AppError::Conflict(format!(
            "car {} is not available for booking",
            car.id
        )));
    }
    Ok(())
}

/// Plan de activación (entrega del coche al cliente)
#[derive(Debug, Clone, PartialEq)]
pub struct ActivatePlan {
    pub contract_id: Uuid,
    pub new_status: ContractStatus,
    pub start_mileage: Decimal,
    pub car_status: CarStatus,
    pub audit: AuditEntry,
}

pub fn plan_activate(contract: &Contract, start_mileage: Decimal) -> AppResult<ActivatePlan> {
    if !can_transition(contract.status, ContractStatus::Active) {
        return Err(AppError::Conflict(format!(
            "contract {} cannot be activated from its current status",
            contract.id
        )));
    }
    if start_mileage < Decimal::ZERO {
        return Err(AppError::ValidationError(
            "start_mileage must not be negative".to_string(),
        ));
    }

    Ok(ActivatePlan {
        contract_id: contract.id,
        new_status: ContractStatus::Active,
        start_mileage,
        car_status: CarStatus::Rented,
        audit: AuditEntry {
            entity_type: "contract",
            entity_id: contract.id,
            action: "activate",
            before: json!({ "status": contract.status }),
            after: json!({ "status": ContractStatus::Active, "start_mileage": start_mileage }),
        },
    })
}

/// Línea de pago validada, lista para insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub payment_type_id: i32,
    pub amount: Decimal,
    pub currency: String,
    pub method: PaymentMethod,
}

/// Datos de cierre ya resueltos por el controller
#[derive(Debug, Clone)]
pub struct CloseInput {
    pub actual_end_date: DateTime<Utc>,
    pub end_mileage: Decimal,
    pub fuel_level: FuelLevel,
    pub cleanliness: Cleanliness,
    pub notes: Option<String>,
    pub payments: Vec<NewPayment>,
}

/// Plan de cierre: todos los efectos de la devolución
#[derive(Debug, Clone, PartialEq)]
pub struct ClosePlan {
    pub contract_id: Uuid,
    pub new_status: ContractStatus,
    pub actual_end_date: DateTime<Utc>,
    pub end_mileage: Decimal,
    pub fuel_level: FuelLevel,
    pub cleanliness: Cleanliness,
    pub notes: Option<String>,
    pub payments: Vec<NewPayment>,
    pub car_status: CarStatus,
    pub audit: AuditEntry,
}

/// Planificar el cierre de un contrato.
///
/// Un contrato ya cerrado o cancelado produce `Conflict`: reinvocar el
/// cierre nunca duplica el lote de pagos. Las líneas de pago con importe
/// no positivo se rechazan explícitamente en vez de descartarse.
pub fn plan_close(contract: &Contract, input: CloseInput) -> AppResult<ClosePlan> {
    if !can_transition(contract.status, ContractStatus::Closed) {
        return Err(AppError::Conflict(format!(
            "contract {} is already {} and cannot be closed again",
            contract.id,
            match contract.status {
                ContractStatus::Closed => "closed",
                ContractStatus::Cancelled => "cancelled",
                _ => "in a terminal state",
            }
        )));
    }

    for (index, payment) in input.payments.iter().enumerate() {
        if payment.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(format!(
                "payment line {} has a non-positive amount ({})",
                index + 1,
                payment.amount
            )));
        }
    }

    let audit = AuditEntry {
        entity_type: "contract",
        entity_id: contract.id,
        action: "close",
        before: json!({ "status": contract.status }),
        after: json!({
            "status": ContractStatus::Closed,
            "actual_end_date": input.actual_end_date,
            "end_mileage": input.end_mileage,
        }),
    };

    Ok(ClosePlan {
        contract_id: contract.id,
        new_status: ContractStatus::Closed,
        actual_end_date: input.actual_end_date,
        end_mileage: input.end_mileage,
        fuel_level: input.fuel_level,
        cleanliness: input.cleanliness,
        notes: input.notes,
        payments: input.payments,
        car_status: CarStatus::Available,
        audit,
    })
}

/// Plan de cancelación
#[derive(Debug, Clone, PartialEq)]
pub struct CancelPlan {
    pub contract_id: Uuid,
    pub new_status: ContractStatus,
    pub reason: Option<String>,
    pub car_status: CarStatus,
    pub audit: AuditEntry,
}

pub fn plan_cancel(contract: &Contract, reason: Option<String>) -> AppResult<CancelPlan> {
    if !can_transition(contract.status, ContractStatus::Cancelled) {
        return Err(AppError::Conflict(format!(
            "contract {} cannot be cancelled from its current status",
            contract.id
        )));
    }

    Ok(CancelPlan {
        contract_id: contract.id,
        new_status: ContractStatus::Cancelled,
        reason: reason.clone(),
        car_status: CarStatus::Available,
        audit: AuditEntry {
            entity_type: "contract",
            entity_id: contract.id,
            action: "cancel",
            before: json!({ "status": contract.status }),
            after: json!({ "status": ContractStatus::Cancelled, "reason": reason }),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn contract_with_status(status: ContractStatus) -> Contract {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        Contract {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            company_car_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            start_date: now,
            end_date: now + chrono::Duration::days(5),
            actual_end_date: None,
            total_amount: dec("6500"),
            currency: "THB".to_string(),
            status,
            full_insurance: true,
            full_insurance_price: dec("1000"),
            baby_seat: false,
            baby_seat_price: Decimal::ZERO,
            island_trip: false,
            island_trip_price: Decimal::ZERO,
            krabi_trip: false,
            krabi_trip_price: Decimal::ZERO,
            pickup_district_id: None,
            pickup_delivery_price: dec("500"),
            pickup_hotel: None,
            pickup_room: None,
            return_district_id: None,
            return_delivery_price: Decimal::ZERO,
            return_hotel: None,
            return_room: None,
            start_mileage: None,
            end_mileage: None,
            fuel_level: None,
            cleanliness: None,
            notes: None,
            created_at: now,
        }
    }

    fn close_input(payments: Vec<NewPayment>) -> CloseInput {
        CloseInput {
            actual_end_date: Utc.with_ymd_and_hms(2025, 3, 6, 9, 0, 0).unwrap(),
            end_mileage: dec("12500"),
            fuel_level: FuelLevel::Full,
            cleanliness: Cleanliness::Clean,
            notes: None,
            payments,
        }
    }

    fn payment(amount: &str) -> NewPayment {
        NewPayment {
            payment_type_id: 1,
            amount: dec(amount),
            currency: "THB".to_string(),
            method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_transition_table() {
        use ContractStatus::*;
        assert!(can_transition(Draft, Active));
        assert!(can_transition(Draft, Closed));
        assert!(can_transition(Draft, Cancelled));
        assert!(can_transition(Active, Closed));
        assert!(can_transition(Active, Cancelled));

        assert!(!can_transition(Active, Draft));
        assert!(!can_transition(Closed, Active));
        assert!(!can_transition(Closed, Cancelled));
        assert!(!can_transition(Cancelled, Closed));
    }

    #[test]
    fn test_close_from_active_produces_full_plan() {
        let contract = contract_with_status(ContractStatus::Active);
        let plan = plan_close(&contract, close_input(vec![payment("6500"), payment("3000")]))
            .unwrap();

        assert_eq!(plan.new_status, ContractStatus::Closed);
        assert_eq!(plan.car_status, CarStatus::Available);
        assert_eq!(plan.payments.len(), 2);
        assert_eq!(plan.audit.action, "close");
        assert_eq!(plan.audit.before, serde_json::json!({ "status": "active" }));
        assert_eq!(plan.audit.after["status"], "closed");
        assert_eq!(plan.audit.after["end_mileage"], serde_json::json!(dec("12500")));
    }

    #[test]
    fn test_close_on_closed_contract_is_a_conflict() {
        // Reinvocar el cierre nunca puede duplicar pagos
        let contract = contract_with_status(ContractStatus::Closed);
        let result = plan_close(&contract, close_input(vec![payment("6500")]));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_close_rejects_non_positive_payment_lines() {
        let contract = contract_with_status(ContractStatus::Active);

        let zero = plan_close(&contract, close_input(vec![payment("6500"), payment("0")]));
        assert!(matches!(zero, Err(AppError::ValidationError(_))));

        let negative = plan_close(&contract, close_input(vec![payment("-100")]));
        match negative {
            Err(AppError::ValidationError(message)) => {
                assert!(message.contains("line 1"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_activate_only_from_draft() {
        let draft = contract_with_status(ContractStatus::Draft);
        let plan = plan_activate(&draft, dec("12000")).unwrap();
        assert_eq!(plan.new_status, ContractStatus::Active);
        assert_eq!(plan.car_status, CarStatus::Rented);

        let active = contract_with_status(ContractStatus::Active);
        assert!(matches!(
            plan_activate(&active, dec("12000")),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_cancel_from_draft_and_active_but_not_terminal() {
        let draft = contract_with_status(ContractStatus::Draft);
        let plan = plan_cancel(&draft, Some("client no-show".to_string())).unwrap();
        assert_eq!(plan.new_status, ContractStatus::Cancelled);
        assert_eq!(plan.car_status, CarStatus::Available);

        let active = contract_with_status(ContractStatus::Active);
        assert!(plan_cancel(&active, None).is_ok());

        let cancelled = contract_with_status(ContractStatus::Cancelled);
        assert!(matches!(plan_cancel(&cancelled, None), Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_booking_requires_available_car() {
        let car = CompanyCar {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            price_per_day: dec("1000"),
            deposit: dec("5000"),
            status: CarStatus::Rented,
            created_at: Utc::now(),
        };
        assert!(matches!(ensure_car_available(&car), Err(AppError::Conflict(_))));

        let available = CompanyCar { status: CarStatus::Available, ..car };
        assert!(ensure_car_available(&available).is_ok());
    }
}
