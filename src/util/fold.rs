//! Case folding for comparison.
//!
//! Folding is locale-independent. ASCII input is lowered byte by byte, anything
//! else goes through Unicode lowercasing. Input that is already folded is
//! returned borrowed.

use std::borrow::Cow;

// Covers titlecase letters too, which are not `is_uppercase`.
fn changes_when_lowercased(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

/// Fold `input` to lowercase.
///
/// Returns the input unchanged (borrowed) when it has no uppercase characters.
///
/// # Examples
///
/// ```
/// use toolshed::util::fold::fold_case;
///
/// assert_eq!(fold_case("CasaCo"), "casaco");
/// assert_eq!(fold_case("ÁGUA"), "água");
/// ```
pub fn fold_case(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        if input.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(input.to_ascii_lowercase())
        } else {
            Cow::Borrowed(input)
        }
    } else if input.chars().any(changes_when_lowercased) {
        Cow::Owned(input.to_lowercase())
    } else {
        Cow::Borrowed(input)
    }
}

/// Fold `input` only when the comparison is case-insensitive.
pub fn fold_if(input: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(input)
    } else {
        fold_case(input)
    }
}
