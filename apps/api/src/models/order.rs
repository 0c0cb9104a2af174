use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_negative_price;

/// A single order line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    #[validate(length(min = 1, message = "product_name cannot be empty"))]
    pub product_name: String,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,

    #[validate(custom(function = "non_negative_price"))]
    pub unit_price: Decimal,
}

impl OrderItem {
    /// `quantity × unit_price`, exact. `None` if it exceeds the decimal range.
    pub fn subtotal(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// Body of POST /generate-user-email.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserOrderRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "items cannot be empty"), nested)]
    pub items: Vec<OrderItem>,

    #[validate(length(min = 1, message = "brand_name cannot be empty"))]
    pub brand_name: String,
}

/// Body of POST /generate-admin-email. Carries the shipping address the
/// operations team needs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminOrderRequest {
    #[validate(length(min = 1, message = "brand_name cannot be empty"))]
    pub brand_name: String,

    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "items cannot be empty"), nested)]
    pub items: Vec<OrderItem>,
}
