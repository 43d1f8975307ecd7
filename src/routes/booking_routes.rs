use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::common_dto::ApiResponse;
use crate::dto::contract_dto::ContractResponse;
use crate::middleware::requester::Requester;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new().route("/", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    requester: Requester,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<ContractResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller
        .create(requester, request, state.config.default_currency.clone())
        .await?;
    Ok(Json(response))
}
