//! Single entry point that turns raw user input into a quote and a range.
//!
//! Stages run strictly in order and the first failure is returned as-is:
//!
//! ```text
//! validate ──▶ fetch current price ──▶ parse quote
//!                                          │
//!                                          ▼
//!              fetch history (window) ──▶ aggregate min/max
//! ```
//!
//! Validation happens before any request is made. No value is kept between
//! calls, so one [`PriceLookup`] can serve any number of lookups, including
//! concurrent ones for different currencies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::aggregate::aggregate_history;
use crate::fetcher::BpiFetcher;
use crate::http_client::HttpClient;
use crate::parser::parse_quote;
use crate::{
    CurrencyCode, HistoryWindow, LookupError, PriceQuote, PriceRange, ServiceConfig, UtcDateTime,
};

/// Complete result of one lookup; never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupReport {
    pub quote: PriceQuote,
    pub range: PriceRange,
}

/// Orchestrates validation, both fetches, parsing, and aggregation.
#[derive(Clone)]
pub struct PriceLookup {
    fetcher: BpiFetcher,
}

impl PriceLookup {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ServiceConfig) -> Self {
        Self {
            fetcher: BpiFetcher::new(http_client, config),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        self.fetcher.config()
    }

    /// Look up `raw_input` with the historical window ending today (UTC).
    pub async fn lookup(&self, raw_input: &str) -> Result<LookupReport, LookupError> {
        self.lookup_as_of(raw_input, UtcDateTime::now().date()).await
    }

    /// Look up `raw_input` with the historical window ending on `today`.
    pub async fn lookup_as_of(
        &self,
        raw_input: &str,
        today: Date,
    ) -> Result<LookupReport, LookupError> {
        let currency = CurrencyCode::parse(raw_input)?;

        let raw_quote = self.fetcher.fetch_current_price(&currency).await?;
        let quote = parse_quote(&raw_quote.body, &currency)?;

        let window = HistoryWindow::trailing(today, self.config().history_days());
        let raw_history = self.fetcher.fetch_history(&currency, window).await?;
        let range = aggregate_history(&raw_history.body, &currency)?;

        Ok(LookupReport { quote, range })
    }
}
