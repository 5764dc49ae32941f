//! Error types for the ownership suite.
//!
//! A failing case always surfaces as a [`TestError`]. [`TestError::kind`] splits them into
//! assertion failures (the API misbehaved), unimplemented contract cases, and infrastructure
//! errors (routing, configuration, persistence, serialization).

use axum::http::{Method, StatusCode};
use thiserror::Error;

use crate::{config::ConfigError, route::RouteError, suite::Case};

/// Coarse classification of a [`TestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The API under test did not behave as the case expects.
    Assertion,
    /// The case was not overridden by the resource suite.
    NotImplemented,
    /// The case could not run to completion.
    Error,
}

#[derive(Error, Debug)]
pub enum TestError {
    /// Response status differs from the expected one.
    #[error("{method} {url}: expected status {expected}, got {actual}; body: {body}")]
    UnexpectedStatus {
        method: Method,
        url: String,
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    /// An item attribute does not loosely equal the payload value.
    #[error("Field `{field}` mismatch: expected {expected:?}, got {actual:?}")]
    FieldMismatch {
        field: String,
        expected: String,
        actual: String,
    },
    /// A read-only field took the value the update attempted to write.
    #[error("Read-only field `{field}` was changed to {value:?}")]
    ReadonlyFieldChanged { field: String, value: String },
    /// Comparison key is absent from the item or payload.
    #[error("Field `{0}` is missing")]
    MissingField(String),
    #[error("Expected {expected} item(s), found {actual}")]
    UnexpectedCount { expected: usize, actual: usize },
    /// Response body does not have the JSON shape the case reads.
    #[error("{method} {url}: expected a JSON {expected} body, got: {body}")]
    UnexpectedBody {
        method: Method,
        url: String,
        expected: &'static str,
        body: String,
    },
    /// Case left to the resource suite was not overridden.
    #[error("Case `{0}` is not implemented by this suite")]
    NotImplemented(Case),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Item lookup through the model store found nothing.
    #[error("Item {0} not found")]
    NotFound(String),
    /// Payload could not be turned into a model, or lacks a field the suite contract requires.
    #[error("Invalid payload field `{field}`: {reason}")]
    InvalidPayload { field: String, reason: String },
    #[error(transparent)]
    Http(#[from] axum::http::Error),
    #[error(transparent)]
    Body(#[from] axum::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl TestError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnexpectedStatus { .. }
            | Self::FieldMismatch { .. }
            | Self::ReadonlyFieldChanged { .. }
            | Self::MissingField(_)
            | Self::UnexpectedCount { .. }
            | Self::UnexpectedBody { .. } => FailureKind::Assertion,
            Self::NotImplemented(_) => FailureKind::NotImplemented,
            _ => FailureKind::Error,
        }
    }
}
