//! Applying a schema validator to the parts of a request.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::validation::{SchemaValidator, ValidationError};

/// Status used when the data fails validation.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status used when the validator itself fails.
pub const STATUS_INTERNAL_ERROR: u16 = 500;
/// Message returned when the validator itself fails.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal validation error";

/// Part of a request that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestLocation {
    Body,
    Params,
    Query,
}

impl RequestLocation {
    /// All locations, in the order [`RequestValidator::validate_all`] checks them.
    pub const ALL: [RequestLocation; 3] = [
        RequestLocation::Body,
        RequestLocation::Params,
        RequestLocation::Query,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestLocation::Body => "body",
            RequestLocation::Params => "params",
            RequestLocation::Query => "query",
        }
    }
}

impl fmt::Display for RequestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validatable parts of a request, already decoded to JSON.
///
/// Missing parts are `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestParts {
    pub body: Value,
    pub params: Value,
    pub query: Value,
}

impl RequestParts {
    pub fn new(body: Value, params: Value, query: Value) -> Self {
        RequestParts {
            body,
            params,
            query,
        }
    }

    /// Request with only a body.
    pub fn with_body(body: Value) -> Self {
        RequestParts {
            body,
            ..Default::default()
        }
    }

    pub fn get(&self, location: RequestLocation) -> &Value {
        match location {
            RequestLocation::Body => &self.body,
            RequestLocation::Params => &self.params,
            RequestLocation::Query => &self.query,
        }
    }
}

/// JSON body sent back with a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionBody {
    pub success: bool,
    pub errors: Vec<ValidationError>,
}

/// A rejected request: status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub status: u16,
    pub body: RejectionBody,
}

impl Rejection {
    /// The data failed validation.
    pub fn bad_request(errors: Vec<ValidationError>) -> Self {
        Rejection {
            status: STATUS_BAD_REQUEST,
            body: RejectionBody {
                success: false,
                errors,
            },
        }
    }

    /// The validator failed while running.
    pub fn internal() -> Self {
        Rejection {
            status: STATUS_INTERNAL_ERROR,
            body: RejectionBody {
                success: false,
                errors: vec![ValidationError::new(INTERNAL_ERROR_MESSAGE)],
            },
        }
    }

    /// Serialize the body as a JSON value.
    pub fn body_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.body)?)
    }
}

/// What to do with a request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the request to the next handler.
    Continue,
    /// Stop and answer with the rejection.
    Reject(Rejection),
}

impl Verdict {
    pub fn is_continue(&self) -> bool {
        matches!(self, Verdict::Continue)
    }

    pub fn into_rejection(self) -> Option<Rejection> {
        match self {
            Verdict::Continue => None,
            Verdict::Reject(rejection) => Some(rejection),
        }
    }
}

/// Validates request parts with one schema validator.
#[derive(Debug, Clone)]
pub struct RequestValidator<V> {
    validator: V,
}

impl<V: SchemaValidator> RequestValidator<V> {
    pub fn new(validator: V) -> Self {
        RequestValidator { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validate one part of the request.
    pub fn validate(&self, location: RequestLocation, parts: &RequestParts) -> Verdict {
        match self.validator.validate(parts.get(location)) {
            Ok(report) if report.is_valid() => Verdict::Continue,
            Ok(report) => {
                debug!(
                    %location,
                    errors = report.errors.len(),
                    "request failed validation"
                );
                Verdict::Reject(Rejection::bad_request(report.errors))
            }
            Err(e) => {
                warn!(%location, error = %e, "schema validator failed");
                Verdict::Reject(Rejection::internal())
            }
        }
    }

    pub fn validate_body(&self, parts: &RequestParts) -> Verdict {
        self.validate(RequestLocation::Body, parts)
    }

    pub fn validate_params(&self, parts: &RequestParts) -> Verdict {
        self.validate(RequestLocation::Params, parts)
    }

    pub fn validate_query(&self, parts: &RequestParts) -> Verdict {
        self.validate(RequestLocation::Query, parts)
    }

    /// Validate body, params and query in that order, stopping at the first
    /// rejection.
    pub fn validate_all(&self, parts: &RequestParts) -> Verdict {
        for location in RequestLocation::ALL {
            if let verdict @ Verdict::Reject(_) = self.validate(location, parts) {
                return verdict;
            }
        }
        Verdict::Continue
    }
}
