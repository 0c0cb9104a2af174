//! Axum route handlers for order emails.

use axum::{extract::State, Json};
use validator::Validate;

use crate::email::composer::{
    compose_admin_email, compose_user_email, AdminEmailResponse, UserEmailResponse,
};
use crate::errors::AppError;
use crate::models::order::{AdminOrderRequest, UserOrderRequest};
use crate::state::AppState;

/// POST /generate-admin-email
///
/// Internal new-order notification for store operations, plus the exact order total.
pub async fn handle_generate_admin_email(
    State(state): State<AppState>,
    Json(request): Json<AdminOrderRequest>,
) -> Result<Json<AdminEmailResponse>, AppError> {
    request.validate()?;

    let response = compose_admin_email(state.llm.as_ref(), &request).await?;
    Ok(Json(response))
}

/// POST /generate-user-email
///
/// Customer order confirmation, plus the exact order total.
pub async fn handle_generate_user_email(
    State(state): State<AppState>,
    Json(request): Json<UserOrderRequest>,
) -> Result<Json<UserEmailResponse>, AppError> {
    request.validate()?;

    let response = compose_user_email(state.llm.as_ref(), &request).await?;
    Ok(Json(response))
}
