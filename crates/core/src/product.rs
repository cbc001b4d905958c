//! Products and lookup-response validation.
//!
//! A [`Product`] can only be built through validation, so holding one means
//! the name is non-empty and the price is a finite, non-negative number.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LookupError, LookupResult};
use crate::value_object::ValueObject;

/// A validated product, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
}

impl ValueObject for Product {}

impl Product {
    /// Build a product from already-typed values.
    pub fn new(name: impl Into<String>, price: f64) -> LookupResult<Self> {
        let name = normalize_name(&name.into())?;
        let price = normalize_price(price)?;
        Ok(Self { name, price })
    }

    /// Validate and normalize a decoded response body.
    pub fn from_raw(raw: &RawProduct) -> LookupResult<Self> {
        let name = match &raw.product_name {
            Some(Value::String(s)) => normalize_name(s)?,
            Some(Value::Null) | None => {
                return Err(LookupError::validation("product_name is missing"));
            }
            Some(other) => {
                return Err(LookupError::validation(format!(
                    "product_name must be a string, got {}",
                    json_kind(other)
                )));
            }
        };
        let price = coerce_price(raw.product_price.as_ref())?;
        Ok(Self { name, price })
    }

    /// Decode and validate a raw response body.
    ///
    /// Anything that is not a JSON object is a validation failure.
    pub fn from_json_slice(body: &[u8]) -> LookupResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| LookupError::validation(format!("response is not JSON: {e}")))?;
        if !value.is_object() {
            return Err(LookupError::validation(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        let raw: RawProduct = serde_json::from_value(value)
            .map_err(|e| LookupError::validation(e.to_string()))?;
        Self::from_raw(&raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Lookup response body as received, before validation.
///
/// Fields are kept as loose JSON so that malformed values surface as
/// validation errors instead of decode errors. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub product_name: Option<Value>,
    #[serde(default)]
    pub product_price: Option<Value>,
}

fn normalize_name(name: &str) -> LookupResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LookupError::validation("product_name is empty"));
    }
    Ok(trimmed.to_string())
}

fn normalize_price(price: f64) -> LookupResult<f64> {
    if !price.is_finite() {
        return Err(LookupError::validation(format!(
            "product_price must be finite, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(LookupError::validation(format!(
            "product_price must not be negative, got {price}"
        )));
    }
    // folds -0.0 into 0.0
    Ok(price + 0.0)
}

/// Accept a JSON number or a numeric string.
fn coerce_price(value: Option<&Value>) -> LookupResult<f64> {
    let price = match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| LookupError::validation(format!("product_price {n} is not representable")))?,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(LookupError::validation("product_price is an empty string"));
            }
            trimmed.parse::<f64>().map_err(|_| {
                LookupError::validation(format!("product_price {s:?} is not a number"))
            })?
        }
        Some(Value::Null) | None => {
            return Err(LookupError::validation("product_price is missing"));
        }
        Some(other) => {
            return Err(LookupError::validation(format!(
                "product_price must be a number, got {}",
                json_kind(other)
            )));
        }
    };
    normalize_price(price)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
