pub mod catalog;
pub mod order;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Rejects negative prices. Zero is allowed (free items, promotional lines).
pub(crate) fn non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}
