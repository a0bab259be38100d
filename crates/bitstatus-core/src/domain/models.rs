use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

use crate::{CurrencyCode, UtcDateTime, ValidationError};

const SERVICE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Current Bitcoin price in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub currency: CurrencyCode,
    pub amount: Decimal,
    pub observed_at: UtcDateTime,
}

impl PriceQuote {
    pub fn new(
        currency: CurrencyCode,
        amount: Decimal,
        observed_at: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("amount", amount)?;

        Ok(Self {
            currency,
            amount,
            observed_at,
        })
    }
}

/// Lowest and highest closing price over a historical window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub currency: CurrencyCode,
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(currency: CurrencyCode, min: Decimal, max: Decimal) -> Result<Self, ValidationError> {
        validate_non_negative("min", min)?;
        validate_non_negative("max", max)?;

        if min > max {
            return Err(ValidationError::InvalidRange);
        }

        Ok(Self { currency, min, max })
    }
}

/// Inclusive date window requested from the historical endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: Date,
    pub end: Date,
}

impl HistoryWindow {
    /// Window ending on `end` and starting `days` calendar days earlier.
    pub fn trailing(end: Date, days: u16) -> Self {
        let start = end
            .checked_sub(Duration::days(i64::from(days)))
            .unwrap_or(Date::MIN);
        Self { start, end }
    }

    pub fn start_param(&self) -> String {
        format_service_date(self.start)
    }

    pub fn end_param(&self) -> String {
        format_service_date(self.end)
    }
}

impl Display for HistoryWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_param(), self.end_param())
    }
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_service_date(date: Date) -> String {
    date.format(SERVICE_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn validate_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
