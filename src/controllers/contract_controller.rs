use crate::dto::common_dto::ApiResponse;
use crate::dto::contract_dto::{
    ActivateContractRequest, CancelContractRequest, CloseContractRequest, ContractResponse,
    PaymentResponse,
};
use crate::middleware::requester::Requester;
use crate::models::contract::Contract;
use crate::repositories::audit_repository::AuditRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::contract_repository::ContractRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::services::contract_lifecycle::{
    plan_activate, plan_cancel, plan_close, CloseInput, NewPayment,
};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ContractController {
    contracts: ContractRepository,
    cars: CarRepository,
    payments: PaymentRepository,
    audits: AuditRepository,
}

impl ContractController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            contracts: ContractRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            payments: PaymentRepository::new(pool.clone()),
            audits: AuditRepository::new(pool),
        }
    }

    pub async fn get_by_id(
        &self,
        requester: Requester,
        id: Uuid,
    ) -> Result<ContractResponse, AppError> {
        let contract = self.load_owned(requester, id).await?;
        Ok(ContractResponse::from(contract))
    }

    pub async fn list(&self, requester: Requester) -> Result<Vec<ContractResponse>, AppError> {
        let contracts = self.contracts.list_by_company(requester.company_id).await?;
        Ok(contracts.into_iter().map(ContractResponse::from).collect())
    }

    /// Pagos registrados de un contrato (ledger append-only)
    pub async fn list_payments(
        &self,
        requester: Requester,
        id: Uuid,
    ) -> Result<Vec<PaymentResponse>, AppError> {
        let contract = self.load_owned(requester, id).await?;
        let payments = self.payments.list_by_contract(contract.id).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    /// Activar un contrato: entrega del coche al cliente
    pub async fn activate(
        &self,
        requester: Requester,
        id: Uuid,
        request: ActivateContractRequest,
    ) -> Result<ApiResponse<ContractResponse>, AppError> {
        request.validate()?;
        let contract = self.load_owned(requester, id).await?;

        let plan = plan_activate(&contract, request.start_mileage)?;

        let mut tx = self
            .contracts
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        self.contracts.apply_activate(&mut tx, &plan).await?;
        self.cars
            .update_status(&mut tx, contract.company_car_id, plan.car_status)
            .await?;
        self.audits
            .record(&mut tx, &plan.audit, requester.company_id)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing activation: {}", e)))?;

        tracing::info!("🚗 Contrato {} activado", id);

        let updated = self.reload(id).await?;
        Ok(ApiResponse::success_with_message(
            ContractResponse::from(updated),
            "Contract activated successfully".to_string(),
        ))
    }

    /// Cerrar un contrato: estado de devolución, lote de pagos y
    /// liberación del coche, todo o nada.
    pub async fn close(
        &self,
        requester: Requester,
        id: Uuid,
        request: CloseContractRequest,
    ) -> Result<ApiResponse<ContractResponse>, AppError> {
        request.validate()?;
        let contract = self.load_owned(requester, id).await?;

        let payments: Vec<NewPayment> = request
            .payments
            .iter()
            .map(|line| NewPayment {
                payment_type_id: line.payment_type_id,
                amount: line.amount,
                currency: line.currency.clone().unwrap_or_else(|| contract.currency.clone()),
                method: line.method,
            })
            .collect();

        let plan = plan_close(
            &contract,
            CloseInput {
                actual_end_date: request.actual_end_date,
                end_mileage: request.end_mileage,
                fuel_level: request.fuel_level,
                cleanliness: request.cleanliness,
                notes: request.notes,
                payments,
            },
        )?;

        let mut tx = self
            .contracts
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        self.contracts.apply_close(&mut tx, &plan).await?;
        self.payments
            .insert_batch(&mut tx, plan.contract_id, &plan.payments, requester.company_id)
            .await?;
        self.cars
            .update_status(&mut tx, contract.company_car_id, plan.car_status)
            .await?;
        self.audits
            .record(&mut tx, &plan.audit, requester.company_id)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing close: {}", e)))?;

        tracing::info!("✅ Contrato {} cerrado ({} pagos)", id, plan.payments.len());

        let updated = self.reload(id).await?;
        Ok(ApiResponse::success_with_message(
            ContractResponse::from(updated),
            "Contract closed successfully".to_string(),
        ))
    }

    /// Cancelar un contrato desde draft/active y liberar el coche
    pub async fn cancel(
        &self,
        requester: Requester,
        id: Uuid,
        request: CancelContractRequest,
    ) -> Result<ApiResponse<ContractResponse>, AppError> {
        request.validate()?;
        let contract = self.load_owned(requester, id).await?;

        let plan = plan_cancel(&contract, request.reason)?;

        let mut tx = self
            .contracts
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        self.contracts.apply_cancel(&mut tx, &plan).await?;
        self.cars
            .update_status(&mut tx, contract.company_car_id, plan.car_status)
            .await?;
        self.audits
            .record(&mut tx, &plan.audit, requester.company_id)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing cancellation: {}", e)))?;

        tracing::info!("🛑 Contrato {} cancelado", id);

        let updated = self.reload(id).await?;
        Ok(ApiResponse::success_with_message(
            ContractResponse::from(updated),
            "Contract cancelled successfully".to_string(),
        ))
    }

    async fn load_owned(&self, requester: Requester, id: Uuid) -> Result<Contract, AppError> {
        let contract = self
            .contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contract not found".to_string()))?;

        if !requester.can_access(contract.company_id) {
            return Err(AppError::Forbidden(
                "Contract does not belong to this company".to_string(),
            ));
        }

        Ok(contract)
    }

    async fn reload(&self, id: Uuid) -> Result<Contract, AppError> {
        self.contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contract not found".to_string()))
    }
}
