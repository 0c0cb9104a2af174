//! Recommendation pipeline — profile + catalog → prompt → one model call → reconcile.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, CURRENCY_SYMBOL};
use crate::llm_client::TextGenerator;
use crate::models::catalog::{CatalogProduct, PurchaseHistoryItem, UserProfile};
use crate::recommendation::prompts::{NO_PURCHASE_HISTORY, RECOMMENDATION_PROMPT_TEMPLATE};
use crate::recommendation::reconcile::{reconcile, RecommendationOutcome};

/// Catalog entries whose gender tag matches the user's, ignoring case.
pub fn products_for_gender<'a>(
    products: &'a [CatalogProduct],
    gender: &str,
) -> impl Iterator<Item = &'a CatalogProduct> {
    let gender = gender.to_lowercase();
    products
        .iter()
        .filter(move |p| p.gender.to_lowercase() == gender)
}

fn format_products<'a>(products: impl Iterator<Item = &'a CatalogProduct>) -> String {
    products
        .map(|p| {
            format!(
                "{} | Category: {} | Price: {CURRENCY_SYMBOL}{}",
                p.title, p.category, p.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_history(history: &[PurchaseHistoryItem]) -> String {
    if history.is_empty() {
        return NO_PURCHASE_HISTORY.to_string();
    }
    history
        .iter()
        .map(|h| {
            format!(
                "{} | Category: {} | Price: {CURRENCY_SYMBOL}{}",
                h.title, h.category, h.unit_price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the recommendation prompt. Only gender-matching products are offered
/// to the model; reconciliation still maps against the full catalog.
pub fn build_recommendation_prompt(
    profile: &UserProfile,
    products: &[CatalogProduct],
    history: &[PurchaseHistoryItem],
) -> String {
    let age = profile.age.to_string();
    let history_text = format_history(history);
    let product_text = format_products(products_for_gender(products, &profile.gender));

    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("age", age.as_str()),
            ("gender", profile.gender.as_str()),
            ("state", profile.state.as_str()),
            ("country", profile.country.as_str()),
            ("history", history_text.as_str()),
            ("products", product_text.as_str()),
        ],
    )
}

/// Runs the full pipeline. Model failures propagate; an unusable reply does not.
pub async fn recommend(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    products: &[CatalogProduct],
    history: &[PurchaseHistoryItem],
) -> Result<RecommendationOutcome, AppError> {
    info!(
        "Recommending from {} catalog products ({} history items)",
        products.len(),
        history.len()
    );

    let prompt = build_recommendation_prompt(profile, products, history);
    let reply = llm.generate(&prompt).await?;

    Ok(reconcile(&reply, products))
}
