//! Request payload contracts for the REST API
//!
//! Browser clients submit form state as-is, so numeric fields can arrive
//! as JSON numbers or as strings. Fields are normalized here and checked
//! in [`crate::validation`]; a malformed value becomes a default that the
//! validators reject with a descriptive message rather than a bare
//! deserialization error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomerRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub previous_bills: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub bill_number: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub bill_amount: f64,
    #[serde(default)]
    pub bill_date: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentRequest {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub paying_amount: f64,
    #[serde(default)]
    pub notes: String,
    /// Accepted for wire compatibility; not persisted.
    #[serde(default)]
    pub paid_date: String,
}

/// Accept a JSON string or number, normalized to its string form. Any
/// other type becomes the empty string, which validation rejects.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accept a JSON number or numeric string, normalized to `f64`.
/// Anything unparseable becomes 0.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_number_accepts_string_and_number() {
        let from_string: NewBillRequest =
            serde_json::from_value(serde_json::json!({"billNumber": "1001"})).unwrap();
        assert_eq!(from_string.bill_number, "1001");

        let from_number: NewBillRequest =
            serde_json::from_value(serde_json::json!({"billNumber": 1001})).unwrap();
        assert_eq!(from_number.bill_number, "1001");
    }

    #[test]
    fn amounts_accept_numeric_strings() {
        let request: NewBillRequest =
            serde_json::from_value(serde_json::json!({"billAmount": "500.5"})).unwrap();
        assert_eq!(request.bill_amount, 500.5);
    }

    #[test]
    fn unparseable_amount_defaults_to_zero() {
        let request: NewPaymentRequest =
            serde_json::from_value(serde_json::json!({"payingAmount": "abc"})).unwrap();
        assert_eq!(request.paying_amount, 0.0);
    }

    #[test]
    fn missing_fields_default() {
        let request: NewCustomerRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.customer_name, "");
        assert_eq!(request.previous_bills, 0.0);
    }
}
