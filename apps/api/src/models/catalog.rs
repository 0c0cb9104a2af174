use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_negative_price;

/// One product the model may recommend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogProduct {
    pub product_id: i64,

    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: String,

    /// Audience tag, compared case-insensitively against the user's gender.
    #[validate(length(min = 1, message = "gender cannot be empty"))]
    pub gender: String,

    #[validate(custom(function = "non_negative_price"))]
    pub price: Decimal,
}

/// One product the user has bought before.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseHistoryItem {
    pub product_id: i64,

    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: String,

    #[validate(custom(function = "non_negative_price"))]
    pub unit_price: Decimal,
}

/// Identity and demographics shared by both recommendation requests.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,

    #[validate(length(min = 1, message = "gender cannot be empty"))]
    pub gender: String,

    #[validate(length(min = 1, message = "state cannot be empty"))]
    pub state: String,

    #[validate(length(min = 1, message = "country cannot be empty"))]
    pub country: String,
}

/// Body of POST /recommend-user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserProfile,

    #[validate(nested)]
    pub products: Vec<CatalogProduct>,
}

/// Body of POST /recommend-user-with-history. `purchase_history` must be
/// present but may be empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecommendWithHistoryRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserProfile,

    #[validate(nested)]
    pub purchase_history: Vec<PurchaseHistoryItem>,

    #[validate(nested)]
    pub products: Vec<CatalogProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_JSON: &str = r#"
        "name": "Meera",
        "email": "meera@example.in",
        "age": 29,
        "gender": "Female",
        "state": "Kerala",
        "country": "India"
    "#;

    #[test]
    fn test_recommend_request_flattens_profile() {
        let json = format!(
            r#"{{ {PROFILE_JSON}, "products": [
                {{"product_id": 7, "title": "Kasavu Saree", "category": "Sarees", "gender": "female", "price": 2499}}
            ] }}"#
        );
        let request: RecommendRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.profile.state, "Kerala");
        assert_eq!(request.products[0].product_id, 7);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_with_history_requires_purchase_history_field() {
        let json = format!(r#"{{ {PROFILE_JSON}, "products": [] }}"#);
        assert!(serde_json::from_str::<RecommendWithHistoryRequest>(&json).is_err());
    }

    #[test]
    fn test_with_history_accepts_empty_history() {
        let json = format!(r#"{{ {PROFILE_JSON}, "purchase_history": [], "products": [] }}"#);
        let request: RecommendWithHistoryRequest = serde_json::from_str(&json).unwrap();
        assert!(request.purchase_history.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_profile_age_out_of_range_fails_validation() {
        let json = format!(r#"{{ {PROFILE_JSON}, "products": [] }}"#).replace("29", "0");
        let request: RecommendRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_history_item_requires_category() {
        let json = format!(
            r#"{{ {PROFILE_JSON}, "products": [], "purchase_history": [
                {{"product_id": 4, "title": "Silk Blouse", "category": "", "unit_price": 799}}
            ] }}"#
        );
        let request: RecommendWithHistoryRequest = serde_json::from_str(&json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("purchase_history"));
    }

    #[test]
    fn test_catalog_product_requires_gender_tag() {
        let json = format!(
            r#"{{ {PROFILE_JSON}, "products": [
                {{"product_id": 1, "title": "Kurta", "category": "Tops", "gender": "", "price": 10}}
            ] }}"#
        );
        let request: RecommendRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nested_catalog_product_is_validated() {
        let json = format!(
            r#"{{ {PROFILE_JSON}, "products": [
                {{"product_id": 1, "title": "", "category": "Tops", "gender": "female", "price": 10}}
            ] }}"#
        );
        let request: RecommendRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_err());
    }
}
