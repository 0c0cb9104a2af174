//! Reconciliation — turns free-text model output back into catalog IDs.
//!
//! The reply is searched for a brace-delimited span, parsed as JSON, and every
//! title in `recommended_titles` is looked up by exact string in the request's
//! own catalog. Titles the catalog does not know are dropped. The two ways the
//! reply can be unusable (no braces at all, braces around invalid JSON) are
//! reported as distinct errors together with the raw text.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::catalog::CatalogProduct;

lazy_static! {
    /// First `{` through last `}`, across newlines.
    static ref JSON_OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

const TITLES_KEY: &str = "recommended_titles";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("No valid JSON found in LLM response")]
    NoJsonFound,

    #[error("Invalid JSON format from LLM")]
    InvalidJson,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedProduct {
    pub product_id: i64,
    pub title: String,
}

/// Response body of both recommendation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    Recommended {
        recommended_products: Vec<RecommendedProduct>,
    },
    Unparseable {
        #[serde(serialize_with = "serialize_message")]
        error: ReconcileError,
        raw_output: String,
    },
}

fn serialize_message<S: Serializer>(
    error: &ReconcileError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Returns the greedy brace-delimited span of `text`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}

/// Maps the titles in a model reply to catalog products.
pub fn reconcile(raw_reply: &str, catalog: &[CatalogProduct]) -> RecommendationOutcome {
    let raw_output = raw_reply.trim();

    let parsed = extract_json_object(raw_output)
        .ok_or(ReconcileError::NoJsonFound)
        .and_then(|json| {
            serde_json::from_str::<Value>(json).map_err(|_| ReconcileError::InvalidJson)
        });

    let parsed = match parsed {
        Ok(value) => value,
        Err(error) => {
            warn!("Could not reconcile model reply: {error}");
            return RecommendationOutcome::Unparseable {
                error,
                raw_output: raw_output.to_string(),
            };
        }
    };

    // Duplicate titles: the later catalog entry wins.
    let by_title: HashMap<&str, &CatalogProduct> = catalog
        .iter()
        .map(|product| (product.title.as_str(), product))
        .collect();

    let recommended_products = parsed
        .get(TITLES_KEY)
        .and_then(Value::as_array)
        .map(|titles| {
            titles
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|title| by_title.get(title))
                .map(|product| RecommendedProduct {
                    product_id: product.product_id,
                    title: product.title.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    RecommendationOutcome::Recommended {
        recommended_products,
    }
}
