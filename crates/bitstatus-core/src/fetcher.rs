//! Request building and response classification for the two BPI endpoints.
//!
//! | Endpoint | Path |
//! |----------|------|
//! | [`Endpoint::CurrentPrice`] | `/v1/bpi/currentprice/{CODE}.json` |
//! | [`Endpoint::Historical`] | `/v1/bpi/historical/close.json?start=..&end=..&currency=..` |
//!
//! Each fetch is a single attempt. The transport outcome is mapped onto
//! [`LookupError`] before any document parsing happens.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::{CurrencyCode, HistoryWindow, LookupError, ServiceConfig};

const HTTP_OK: u16 = 200;
const HTTP_NOT_FOUND: u16 = 404;

/// BPI endpoint a response or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CurrentPrice,
    Historical,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentPrice => "current_price",
            Self::Historical => "historical",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful (status 200, non-empty) response awaiting parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawApiResponse {
    pub endpoint: Endpoint,
    pub status: u16,
    pub body: String,
}

pub fn current_price_url(base_url: &str, currency: &CurrencyCode) -> String {
    format!(
        "{}/v1/bpi/currentprice/{}.json",
        base_url.trim_end_matches('/'),
        currency.as_str()
    )
}

pub fn historical_url(base_url: &str, currency: &CurrencyCode, window: HistoryWindow) -> String {
    format!(
        "{}/v1/bpi/historical/close.json?start={}&end={}&currency={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&window.start_param()),
        urlencoding::encode(&window.end_param()),
        urlencoding::encode(currency.as_str())
    )
}

/// Issues BPI requests through an [`HttpClient`].
#[derive(Clone)]
pub struct BpiFetcher {
    http_client: Arc<dyn HttpClient>,
    config: ServiceConfig,
}

impl BpiFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ServiceConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn fetch_current_price(
        &self,
        currency: &CurrencyCode,
    ) -> Result<RawApiResponse, LookupError> {
        let url = current_price_url(self.config.base_url(), currency);
        self.fetch(Endpoint::CurrentPrice, url).await
    }

    pub async fn fetch_history(
        &self,
        currency: &CurrencyCode,
        window: HistoryWindow,
    ) -> Result<RawApiResponse, LookupError> {
        let url = historical_url(self.config.base_url(), currency, window);
        self.fetch(Endpoint::Historical, url).await
    }

    async fn fetch(&self, endpoint: Endpoint, url: String) -> Result<RawApiResponse, LookupError> {
        tracing::debug!(endpoint = endpoint.as_str(), %url, "requesting bpi document");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::debug!(endpoint = endpoint.as_str(), %error, "bpi transport failure");
            LookupError::ServiceUnavailable {
                endpoint,
                message: error.message().to_owned(),
            }
        })?;

        tracing::debug!(
            endpoint = endpoint.as_str(),
            status = response.status,
            bytes = response.body.len(),
            "bpi response received"
        );

        classify_response(endpoint, response)
    }
}

/// Map a transport response onto the lookup error taxonomy.
pub fn classify_response(
    endpoint: Endpoint,
    response: HttpResponse,
) -> Result<RawApiResponse, LookupError> {
    match response.status {
        HTTP_OK if response.body.is_empty() => {
            Err(LookupError::EmptyResponseBody { endpoint })
        }
        HTTP_OK => Ok(RawApiResponse {
            endpoint,
            status: response.status,
            body: response.body,
        }),
        HTTP_NOT_FOUND => Err(LookupError::CurrencyNotRecognizedByService {
            endpoint,
            body: response.body,
        }),
        status => Err(LookupError::UnexpectedServiceResponse { endpoint, status }),
    }
}
