//! Schema validation contract for incoming request data.
//!
//! A [`SchemaValidator`] checks one JSON value and reports every problem it
//! finds as a [`ValidationError`]. [`request::RequestValidator`] applies a
//! validator to the parts of a request (body, path params, query) and turns
//! the outcome into a [`request::Verdict`]: let the request through, or reject
//! it with a status code and a JSON body.
//!
//! The validator itself is pluggable. [`adapters`] has two ready-made ones:
//! a closure wrapper and a serde-based typed validator.
//!
//! # Examples
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::json;
//! use toolshed::validation::adapters::TypedValidator;
//! use toolshed::validation::request::{RequestParts, RequestValidator};
//!
//! #[derive(Deserialize)]
//! struct NewUser {
//!     name: String,
//!     age: u32,
//! }
//!
//! let validator = RequestValidator::new(TypedValidator::<NewUser>::new());
//!
//! let ok = RequestParts::with_body(json!({"name": "Ana", "age": 31}));
//! assert!(validator.validate_body(&ok).is_continue());
//!
//! let bad = RequestParts::with_body(json!({"name": "Ana"}));
//! let rejection = validator.validate_body(&bad).into_rejection().unwrap();
//! assert_eq!(rejection.status, 400);
//! ```

pub mod adapters;
pub mod request;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// One step in a path to a field inside a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position.
    Index(usize),
    /// Object key.
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of a field, serialized as a JSON array such as `["items", 0, "sku"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The empty path, pointing at the value itself.
    pub fn root() -> Self {
        FieldPath::default()
    }

    /// Append an object key.
    pub fn key<S: Into<String>>(mut self, key: S) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    /// Append an array index.
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldPath(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for FieldPath {
    fn from(key: &str) -> Self {
        FieldPath::root().key(key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}

/// A single problem found in the validated data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Where the problem is, if the validator knows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldPath>,
    /// Machine-readable category, e.g. `"required"` or `"type"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError {
            message: message.into(),
            field: None,
            kind: None,
        }
    }

    pub fn with_field<P: Into<FieldPath>>(mut self, field: P) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) if !field.is_root() => write!(f, "{field}: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Outcome of validating one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// A report with no errors.
    pub fn valid() -> Self {
        ValidationReport::default()
    }

    /// A report carrying `errors`.
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        ValidationReport { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(errors: Vec<ValidationError>) -> Self {
        ValidationReport { errors }
    }
}

/// Trait for schema validators.
///
/// `Ok` with errors means the data is invalid. `Err` means the validator
/// itself could not run; callers treat that as an internal failure, not as a
/// problem with the data.
pub trait SchemaValidator: Send + Sync {
    /// Validate `data`, collecting every error rather than stopping at the first.
    fn validate(&self, data: &Value) -> Result<ValidationReport>;
}

impl<V: SchemaValidator + ?Sized> SchemaValidator for Box<V> {
    fn validate(&self, data: &Value) -> Result<ValidationReport> {
        (**self).validate(data)
    }
}

impl<V: SchemaValidator + ?Sized> SchemaValidator for Arc<V> {
    fn validate(&self, data: &Value) -> Result<ValidationReport> {
        (**self).validate(data)
    }
}

impl<V: SchemaValidator + ?Sized> SchemaValidator for &V {
    fn validate(&self, data: &Value) -> Result<ValidationReport> {
        (**self).validate(data)
    }
}
