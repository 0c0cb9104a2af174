//! Email composition — summary → prompt → one model call.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::email::prompts::{ADMIN_EMAIL_PROMPT_TEMPLATE, USER_EMAIL_PROMPT_TEMPLATE};
use crate::email::summary::{summarize_items, OrderSummary};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, CURRENCY_SYMBOL};
use crate::llm_client::TextGenerator;
use crate::models::order::{AdminOrderRequest, OrderItem, UserOrderRequest};

#[derive(Debug, Clone, Serialize)]
pub struct AdminEmailResponse {
    pub admin_email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserEmailResponse {
    pub user_email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

pub fn build_admin_email_prompt(order: &AdminOrderRequest, summary: &OrderSummary) -> String {
    let total = summary.total.to_string();
    fill_template(
        ADMIN_EMAIL_PROMPT_TEMPLATE,
        &[
            ("brand_name", order.brand_name.as_str()),
            ("name", order.name.as_str()),
            ("email", order.email.as_str()),
            ("address", order.address.as_str()),
            ("items", summary.lines.as_str()),
            ("currency", CURRENCY_SYMBOL),
            ("total", total.as_str()),
        ],
    )
}

pub fn build_user_email_prompt(order: &UserOrderRequest, summary: &OrderSummary) -> String {
    let total = summary.total.to_string();
    fill_template(
        USER_EMAIL_PROMPT_TEMPLATE,
        &[
            ("brand_name", order.brand_name.as_str()),
            ("name", order.name.as_str()),
            ("items", summary.lines.as_str()),
            ("currency", CURRENCY_SYMBOL),
            ("total", total.as_str()),
        ],
    )
}

fn summarize_order(items: &[OrderItem]) -> Result<OrderSummary, AppError> {
    summarize_items(items)
        .ok_or_else(|| AppError::Validation("order total out of range".to_string()))
}

/// Generates the operations-team notification. The model text is returned as-is.
pub async fn compose_admin_email(
    llm: &dyn TextGenerator,
    order: &AdminOrderRequest,
) -> Result<AdminEmailResponse, AppError> {
    let summary = summarize_order(&order.items)?;
    info!(
        "Composing admin email for {} ({} items, total {})",
        order.brand_name,
        order.items.len(),
        summary.total
    );

    let prompt = build_admin_email_prompt(order, &summary);
    let admin_email = llm.generate(&prompt).await?;

    Ok(AdminEmailResponse {
        admin_email,
        total_amount: summary.total,
    })
}

/// Generates the customer confirmation. The model text is returned as-is.
pub async fn compose_user_email(
    llm: &dyn TextGenerator,
    order: &UserOrderRequest,
) -> Result<UserEmailResponse, AppError> {
    let summary = summarize_order(&order.items)?;
    info!(
        "Composing user email for {} ({} items, total {})",
        order.brand_name,
        order.items.len(),
        summary.total
    );

    let prompt = build_user_email_prompt(order, &summary);
    let user_email = llm.generate(&prompt).await?;

    Ok(UserEmailResponse {
        user_email,
        total_amount: summary.total,
    })
}
