//! # Toolshed
//!
//! A set of small, independent, stateless utilities.
//!
//! ## Features
//!
//! - N-gram string similarity with multiplicity-aware matching
//! - A schema validation contract for request data, with serde-based adapters
//! - Stable in-place insertion sort
//! - Grid maximum path sum and two-sum
//!
//! ```
//! use toolshed::prelude::*;
//!
//! assert!((trigram_similarity("hello", "hella") - 2.0 / 3.0).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod error;
pub mod similarity;
pub mod util;
pub mod validation;

pub mod prelude {
    pub use crate::algorithms::{insertion_sort, insertion_sort_by_key, max_path_sum, two_sum};
    pub use crate::error::{Result, ToolshedError};
    pub use crate::similarity::{
        NgramSimilarity, SimilarityConfig, TextUnit, similarity, trigram_similarity,
    };
    pub use crate::validation::request::{RequestLocation, RequestParts, RequestValidator, Verdict};
    pub use crate::validation::{SchemaValidator, ValidationError, ValidationReport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
