//! # Domain Models
//!
//! Value types produced by a single price lookup.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CurrencyCode`] | Validated ISO 4217 code |
//! | [`PriceQuote`] | Current price with observation time |
//! | [`PriceRange`] | Minimum and maximum over the historical window |
//! | [`HistoryWindow`] | Start/end dates sent to the historical endpoint |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Prices are [`rust_decimal::Decimal`] end to end; no value passes through
//! binary floating point.

mod currency;
mod models;
mod timestamp;

pub use currency::{is_iso_currency, CurrencyCode, ISO_4217_CODES};
pub use models::{format_service_date, HistoryWindow, PriceQuote, PriceRange};
pub use timestamp::UtcDateTime;
