use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::{Endpoint, LookupError};

/// Top-level key holding the price data in both BPI documents.
pub(crate) const PRICE_CONTAINER: &str = "bpi";

/// Parse `body` and require a JSON object at the top level.
pub(crate) fn parse_object(endpoint: Endpoint, body: &str) -> Result<Map<String, Value>, LookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|error| LookupError::malformed(endpoint, format!("invalid JSON: {error}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(LookupError::malformed(
            endpoint,
            format!("expected a JSON object, found {}", json_type(&other)),
        )),
    }
}

/// Fetch the `bpi` container, which must be an object when present.
pub(crate) fn price_container(
    endpoint: Endpoint,
    document: &Map<String, Value>,
) -> Result<&Map<String, Value>, LookupError> {
    match document.get(PRICE_CONTAINER) {
        None | Some(Value::Null) => Err(LookupError::missing(endpoint, PRICE_CONTAINER)),
        Some(Value::Object(container)) => Ok(container),
        Some(other) => Err(LookupError::malformed(
            endpoint,
            format!("'{PRICE_CONTAINER}' must be an object, found {}", json_type(other)),
        )),
    }
}

/// Convert the literal JSON number text into a decimal without going through `f64`.
///
/// Returns `None` when the value cannot be held without rounding.
pub(crate) fn decimal_from_number(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    match text.split_once(|c: char| c == 'e' || c == 'E') {
        None => Decimal::from_str_exact(&text).ok(),
        Some((mantissa, _)) => {
            // from_scientific rounds an over-long mantissa instead of failing.
            Decimal::from_str_exact(mantissa).ok()?;
            Decimal::from_scientific(&text).ok()
        }
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
