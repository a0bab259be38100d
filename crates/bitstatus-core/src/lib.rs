//! # Bitstatus Core
//!
//! Current Bitcoin price and trailing price range from the CoinDesk Bitcoin
//! Price Index (BPI) service.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Min/max over the historical price series |
//! | [`config`] | Base URL, timeout, and window length |
//! | [`domain`] | Currency code, quote, range, window, timestamp |
//! | [`error`] | Validation, lookup, and configuration errors |
//! | [`fetcher`] | URL building and response classification |
//! | [`http_client`] | HTTP transport trait and implementations |
//! | [`lookup`] | Orchestrator entry point |
//! | [`parser`] | Current-price document parsing |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bitstatus_core::{PriceLookup, ReqwestHttpClient, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::from_env()?;
//!     let client = ReqwestHttpClient::new(config.user_agent());
//!     let lookup = PriceLookup::new(Arc::new(client), config);
//!     let report = lookup.lookup("EUR").await?;
//!     println!("{} {}", report.quote.amount, report.quote.currency);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every stage returns [`LookupError`]; callers branch on its kind:
//!
//! ```rust
//! use bitstatus_core::{LookupError, LookupErrorKind};
//!
//! fn handle_error(error: &LookupError) -> &'static str {
//!     match error.kind() {
//!         LookupErrorKind::InvalidCurrency
//!         | LookupErrorKind::CurrencyNotRecognizedByService => "try another currency",
//!         _ if error.retryable() => "try again later",
//!         _ => "service returned unusable data",
//!     }
//! }
//! ```

pub mod aggregate;
pub mod config;
mod document;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod lookup;
pub mod parser;

pub use aggregate::aggregate_history;
pub use config::ServiceConfig;
pub use domain::{
    format_service_date, is_iso_currency, CurrencyCode, HistoryWindow, PriceQuote, PriceRange,
    UtcDateTime, ISO_4217_CODES,
};
pub use error::{ConfigError, LookupError, LookupErrorKind, ValidationError};
pub use fetcher::{classify_response, current_price_url, historical_url, BpiFetcher, Endpoint, RawApiResponse};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};
pub use lookup::{LookupReport, PriceLookup};
pub use parser::parse_quote;
