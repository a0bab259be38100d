use thiserror::Error;

use crate::{CurrencyCode, Endpoint};

/// Validation and contract errors exposed by `bitstatus-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCurrency,
    #[error("currency must be exactly 3 ASCII letters: '{value}'")]
    MalformedCurrency { value: String },
    #[error("currency '{value}' is not an ISO 4217 code")]
    UnknownCurrency { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("price range minimum must be <= maximum")]
    InvalidRange,
}

/// Coarse classification of a [`LookupError`], stable across messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupErrorKind {
    InvalidCurrency,
    CurrencyNotRecognizedByService,
    ServiceUnavailable,
    EmptyResponseBody,
    UnexpectedServiceResponse,
    MalformedDocument,
    MissingField,
    EmptySeries,
}

impl LookupErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCurrency => "invalid_currency",
            Self::CurrencyNotRecognizedByService => "currency_not_recognized_by_service",
            Self::ServiceUnavailable => "service_unavailable",
            Self::EmptyResponseBody => "empty_response_body",
            Self::UnexpectedServiceResponse => "unexpected_service_response",
            Self::MalformedDocument => "malformed_document",
            Self::MissingField => "missing_field",
            Self::EmptySeries => "empty_series",
        }
    }
}

/// Failure of a single price lookup.
///
/// Every stage of a lookup returns this type and the orchestrator forwards it
/// unchanged, so the variant always names the stage that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("requested currency is not valid: {0}")]
    InvalidCurrency(#[from] ValidationError),

    #[error("{endpoint} service does not recognize the currency: {body}")]
    CurrencyNotRecognizedByService { endpoint: Endpoint, body: String },

    #[error("{endpoint} service is unavailable: {message}")]
    ServiceUnavailable { endpoint: Endpoint, message: String },

    #[error("{endpoint} service returned an empty response body")]
    EmptyResponseBody { endpoint: Endpoint },

    #[error("{endpoint} service returned unexpected status {status}")]
    UnexpectedServiceResponse { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} document is malformed: {detail}")]
    MalformedDocument { endpoint: Endpoint, detail: String },

    #[error("{endpoint} document is missing field '{field}'")]
    MissingField { endpoint: Endpoint, field: String },

    #[error("historical series for {currency} contains no prices")]
    EmptySeries { currency: CurrencyCode },
}

impl LookupError {
    pub const fn kind(&self) -> LookupErrorKind {
        match self {
            Self::InvalidCurrency(_) => LookupErrorKind::InvalidCurrency,
            Self::CurrencyNotRecognizedByService { .. } => {
                LookupErrorKind::CurrencyNotRecognizedByService
            }
            Self::ServiceUnavailable { .. } => LookupErrorKind::ServiceUnavailable,
            Self::EmptyResponseBody { .. } => LookupErrorKind::EmptyResponseBody,
            Self::UnexpectedServiceResponse { .. } => LookupErrorKind::UnexpectedServiceResponse,
            Self::MalformedDocument { .. } => LookupErrorKind::MalformedDocument,
            Self::MissingField { .. } => LookupErrorKind::MissingField,
            Self::EmptySeries { .. } => LookupErrorKind::EmptySeries,
        }
    }

    /// Whether repeating the same lookup later could succeed.
    ///
    /// Input problems and document defects are not retryable; the user has to
    /// pick another currency.
    pub const fn retryable(&self) -> bool {
        matches!(
            self.kind(),
            LookupErrorKind::ServiceUnavailable
                | LookupErrorKind::EmptyResponseBody
                | LookupErrorKind::UnexpectedServiceResponse
        )
    }

    pub(crate) fn malformed(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self::MalformedDocument {
            endpoint,
            detail: detail.into(),
        }
    }

    pub(crate) fn missing(endpoint: Endpoint, field: impl Into<String>) -> Self {
        Self::MissingField {
            endpoint,
            field: field.into(),
        }
    }
}

/// Invalid runtime configuration value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    NotPositiveInteger { key: &'static str, value: String },
    #[error("{key} must be an http(s) URL, got '{value}'")]
    InvalidBaseUrl { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    EmptyValue { key: &'static str },
}
