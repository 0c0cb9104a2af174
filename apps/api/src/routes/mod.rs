pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::email::handlers as email;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Order emails
        .route(
            "/generate-admin-email",
            post(email::handle_generate_admin_email),
        )
        .route(
            "/generate-user-email",
            post(email::handle_generate_user_email),
        )
        // Recommendations
        .route(
            "/recommend-user",
            post(recommendation::handle_recommend_user),
        )
        .route(
            "/recommend-user-with-history",
            post(recommendation::handle_recommend_user_with_history),
        )
        .with_state(state)
}
