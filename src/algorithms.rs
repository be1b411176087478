//! Small standalone algorithms.
//!
//! Each function here is self-contained and keeps no state between calls.

pub mod insertion_sort;
pub mod max_path_sum;
pub mod two_sum;

pub use insertion_sort::{insertion_sort, insertion_sort_by_key};
pub use max_path_sum::max_path_sum;
pub use two_sum::two_sum;
