use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::tier_controller::TierController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::tier_dto::{CreateTierRequest, TierResponse, UpdateTierRequest};
use crate::middleware::requester::Requester;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tier_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tier))
        .route("/", get(list_tiers))
        .route("/seed", post(seed_tiers))
        .route("/:id", put(update_tier))
        .route("/:id", delete(delete_tier))
}

async fn create_tier(
    State(state): State<AppState>,
    requester: Requester,
    Json(request): Json<CreateTierRequest>,
) -> Result<Json<ApiResponse<TierResponse>>, AppError> {
    let controller = TierController::new(state.pool.clone());
    let response = controller.create(requester.company_id, request).await?;
    Ok(Json(response))
}

async fn list_tiers(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<Json<Vec<TierResponse>>, AppError> {
    let controller = TierController::new(state.pool.clone());
    let response = controller.list(requester.company_id).await?;
    Ok(Json(response))
}

async fn update_tier(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTierRequest>,
) -> Result<Json<ApiResponse<TierResponse>>, AppError> {
    let controller = TierController::new(state.pool.clone());
    let response = controller.update(requester.company_id, id, request).await?;
    Ok(Json(response))
}

async fn delete_tier(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TierController::new(state.pool.clone());
    controller.delete(requester.company_id, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tier deleted successfully"
    })))
}

async fn seed_tiers(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<Json<Vec<TierResponse>>, AppError> {
    let controller = TierController::new(state.pool.clone());
    let response = controller.seed(requester.company_id).await?;
    Ok(Json(response))
}
