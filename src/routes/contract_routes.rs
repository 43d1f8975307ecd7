use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::contract_controller::ContractController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::contract_dto::{
    ActivateContractRequest, CancelContractRequest, CloseContractRequest, ContractResponse,
    PaymentResponse,
};
use crate::middleware::requester::Requester;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contract_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contracts))
        .route("/:id", get(get_contract))
        .route("/:id/payments", get(list_contract_payments))
        .route("/:id/activate", post(activate_contract))
        .route("/:id/close", post(close_contract))
        .route("/:id/cancel", post(cancel_contract))
}

async fn list_contracts(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<Json<Vec<ContractResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.list(requester).await?;
    Ok(Json(response))
}

async fn get_contract(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
) -> Result<Json<ContractResponse>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.get_by_id(requester, id).await?;
    Ok(Json(response))
}

async fn list_contract_payments(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.list_payments(requester, id).await?;
    Ok(Json(response))
}

async fn activate_contract(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
    Json(request): Json<ActivateContractRequest>,
) -> Result<Json<ApiResponse<ContractResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.activate(requester, id, request).await?;
    Ok(Json(response))
}

async fn close_contract(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
    Json(request): Json<CloseContractRequest>,
) -> Result<Json<ApiResponse<ContractResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.close(requester, id, request).await?;
    Ok(Json(response))
}

async fn cancel_contract(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
    Json(request): Json<CancelContractRequest>,
) -> Result<Json<ApiResponse<ContractResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.cancel(requester, id, request).await?;
    Ok(Json(response))
}
