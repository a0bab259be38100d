use serde_json::Value;

use crate::document::{decimal_from_number, parse_object, price_container, PRICE_CONTAINER};
use crate::{CurrencyCode, Endpoint, LookupError, PriceQuote, UtcDateTime};

const RATE_FIELD: &str = "rate_float";

/// Extract the current price for `currency` from a current-price document.
///
/// The service's own `time` block is ignored; `observed_at` is the moment of
/// parsing.
pub fn parse_quote(body: &str, currency: &CurrencyCode) -> Result<PriceQuote, LookupError> {
    const ENDPOINT: Endpoint = Endpoint::CurrentPrice;

    let document = parse_object(ENDPOINT, body)?;
    let container = price_container(ENDPOINT, &document)?;

    let entry_path = format!("{PRICE_CONTAINER}.{currency}");
    let entry = container
        .get(currency.as_str())
        .ok_or_else(|| LookupError::missing(ENDPOINT, entry_path.clone()))?;

    let rate = match entry.get(RATE_FIELD) {
        Some(Value::Number(number)) => number,
        _ => {
            return Err(LookupError::missing(
                ENDPOINT,
                format!("{entry_path}.{RATE_FIELD}"),
            ))
        }
    };

    let amount = decimal_from_number(rate).ok_or_else(|| {
        LookupError::malformed(
            ENDPOINT,
            format!("{entry_path}.{RATE_FIELD} cannot be held as an exact decimal: {rate}"),
        )
    })?;

    PriceQuote::new(currency.clone(), amount, UtcDateTime::now())
        .map_err(|error| LookupError::malformed(ENDPOINT, format!("{entry_path}: {error}")))
}
