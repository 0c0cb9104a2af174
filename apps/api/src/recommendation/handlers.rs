//! Axum route handlers for product recommendations.
//!
//! Both endpoints answer 200 even when the model reply cannot be reconciled;
//! the body then carries `error` and `raw_output` instead of products.

use axum::{extract::State, Json};
use validator::Validate;

use crate::errors::AppError;
use crate::models::catalog::{RecommendRequest, RecommendWithHistoryRequest};
use crate::recommendation::engine::recommend;
use crate::recommendation::reconcile::RecommendationOutcome;
use crate::state::AppState;

/// POST /recommend-user
pub async fn handle_recommend_user(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    request.validate()?;

    let outcome = recommend(state.llm.as_ref(), &request.profile, &request.products, &[]).await?;
    Ok(Json(outcome))
}

/// POST /recommend-user-with-history
pub async fn handle_recommend_user_with_history(
    State(state): State<AppState>,
    Json(request): Json<RecommendWithHistoryRequest>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    request.validate()?;

    let outcome = recommend(
        state.llm.as_ref(),
        &request.profile,
        &request.products,
        &request.purchase_history,
    )
    .await?;
    Ok(Json(outcome))
}
