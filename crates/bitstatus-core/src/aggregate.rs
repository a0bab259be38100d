use rust_decimal::Decimal;
use serde_json::Value;

use crate::document::{decimal_from_number, json_type, parse_object, price_container, PRICE_CONTAINER};
use crate::{CurrencyCode, Endpoint, LookupError, PriceRange};

/// Minimum and maximum closing price of a historical document.
///
/// Every entry of the `bpi` date map is visited once. An empty map is an
/// [`LookupError::EmptySeries`] rather than a zero range.
pub fn aggregate_history(body: &str, currency: &CurrencyCode) -> Result<PriceRange, LookupError> {
    const ENDPOINT: Endpoint = Endpoint::Historical;

    let document = parse_object(ENDPOINT, body)?;
    let series = price_container(ENDPOINT, &document)?;

    let mut bounds: Option<(Decimal, Decimal)> = None;
    for (date, value) in series {
        let price = closing_price(date, value)?;
        bounds = Some(match bounds {
            None => (price, price),
            Some((min, max)) => (min.min(price), max.max(price)),
        });
    }

    let (min, max) = bounds.ok_or_else(|| LookupError::EmptySeries {
        currency: currency.clone(),
    })?;

    PriceRange::new(currency.clone(), min, max)
        .map_err(|error| LookupError::malformed(ENDPOINT, error.to_string()))
}

fn closing_price(date: &str, value: &Value) -> Result<Decimal, LookupError> {
    let number = match value {
        Value::Number(number) => number,
        other => {
            return Err(LookupError::malformed(
                Endpoint::Historical,
                format!(
                    "{PRICE_CONTAINER}.{date} must be a number, found {}",
                    json_type(other)
                ),
            ))
        }
    };

    let price = decimal_from_number(number).ok_or_else(|| {
        LookupError::malformed(
            Endpoint::Historical,
            format!("{PRICE_CONTAINER}.{date} cannot be held as an exact decimal: {number}"),
        )
    })?;

    if price < Decimal::ZERO {
        return Err(LookupError::malformed(
            Endpoint::Historical,
            format!("{PRICE_CONTAINER}.{date} must be non-negative, found {price}"),
        ));
    }

    Ok(price)
}
