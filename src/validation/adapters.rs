//! Ready-made [`SchemaValidator`] implementations.
//!
//! - [`FnValidator`] wraps a closure.
//! - [`TypedValidator`] checks that the value deserializes into a Rust type,
//!   then runs optional rules against the typed value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::error::Category;
use serde_path_to_error::{Path, Segment};

use crate::error::Result;
use crate::validation::{FieldPath, PathSegment, SchemaValidator, ValidationError, ValidationReport};

/// A validator backed by a closure.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolshed::validation::{SchemaValidator, ValidationError, ValidationReport};
/// use toolshed::validation::adapters::FnValidator;
///
/// let not_null = FnValidator::new(|data| {
///     Ok(if data.is_null() {
///         ValidationReport::invalid(vec![ValidationError::new("value is required")])
///     } else {
///         ValidationReport::valid()
///     })
/// });
///
/// assert!(not_null.validate(&json!(1)).unwrap().is_valid());
/// assert!(!not_null.validate(&json!(null)).unwrap().is_valid());
/// ```
pub struct FnValidator<F> {
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Value) -> Result<ValidationReport> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        FnValidator { func }
    }
}

impl<F> SchemaValidator for FnValidator<F>
where
    F: Fn(&Value) -> Result<ValidationReport> + Send + Sync,
{
    fn validate(&self, data: &Value) -> Result<ValidationReport> {
        (self.func)(data)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

type Rule<T> = Box<dyn Fn(&T) -> Option<ValidationError> + Send + Sync>;

/// Validates by deserializing into `T`.
///
/// A value that does not deserialize produces a single error carrying the
/// serde message and the path of the offending field. A value that does is then checked against every rule, and
/// all rule failures are reported together.
pub struct TypedValidator<T> {
    rules: Vec<Rule<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> TypedValidator<T> {
    pub fn new() -> Self {
        TypedValidator {
            rules: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Add a rule run against the deserialized value.
    ///
    /// The rule returns `Some(error)` when the value breaks it.
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&T) -> Option<ValidationError> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }
}

impl<T: DeserializeOwned> Default for TypedValidator<T> {
    fn default() -> Self {
        TypedValidator::new()
    }
}

impl<T> fmt::Debug for TypedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedValidator")
            .field("type", &std::any::type_name::<T>())
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}

/// Convert a serde path, skipping segments with no JSON location.
fn field_path(path: &Path) -> FieldPath {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(PathSegment::Index(*index)),
            Segment::Map { key } => Some(PathSegment::Key(key.clone())),
            Segment::Enum { variant } => Some(PathSegment::Key(variant.clone())),
            Segment::Unknown => None,
        })
        .collect()
}

impl<T: DeserializeOwned> SchemaValidator for TypedValidator<T> {
    fn validate(&self, data: &Value) -> Result<ValidationReport> {
        let value: T = match serde_path_to_error::deserialize(data) {
            Ok(value) => value,
            Err(e) => {
                let field = field_path(e.path());
                let inner = e.into_inner();
                let mut error =
                    ValidationError::new(inner.to_string()).with_kind(category_name(inner.classify()));
                if !field.is_root() {
                    error = error.with_field(field);
                }
                return Ok(ValidationReport::invalid(vec![error]));
            }
        };

        let errors: Vec<ValidationError> = self.rules.iter().filter_map(|rule| rule(&value)).collect();
        Ok(ValidationReport::from(errors))
    }
}
