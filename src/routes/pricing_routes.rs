use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::pricing_controller::PricingController;
use crate::dto::pricing_dto::{QuoteMatrixResponse, QuoteQuery};
use crate::middleware::requester::Requester;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pricing_router() -> Router<AppState> {
    Router::new().route("/quote/:car_id", get(quote_matrix))
}

async fn quote_matrix(
    State(state): State<AppState>,
    requester: Requester,
    Path(car_id): Path<Uuid>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteMatrixResponse>, AppError> {
    let controller = PricingController::new(state.pool.clone());
    let response = controller
        .quote(
            requester,
            car_id,
            query.days,
            state.config.quote_max_seasons,
            state.config.default_currency.clone(),
        )
        .await?;
    Ok(Json(response))
}
