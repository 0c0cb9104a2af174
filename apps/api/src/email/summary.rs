//! Order summary — the item lines and exact total embedded in both email prompts.

use rust_decimal::Decimal;

use crate::llm_client::prompts::CURRENCY_SYMBOL;
use crate::models::order::OrderItem;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// One line per item, newline-joined, in request order.
    pub lines: String,
    pub total: Decimal,
}

/// Renders `"{name} | Qty: {q} | Unit: ₹{price} | Subtotal: ₹{subtotal}"` per item
/// and sums the subtotals. `None` when a subtotal or the total overflows.
pub fn summarize_items(items: &[OrderItem]) -> Option<OrderSummary> {
    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let subtotal = item.subtotal()?;
        total = total.checked_add(subtotal)?;
        lines.push(format!(
            "{} | Qty: {} | Unit: {CURRENCY_SYMBOL}{} | Subtotal: {CURRENCY_SYMBOL}{}",
            item.product_name, item.quantity, item.unit_price, subtotal
        ));
    }

    Some(OrderSummary {
        lines: lines.join("\n"),
        total,
    })
}
