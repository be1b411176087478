//! Two-sum: find two positions whose values add up to a target.

use ahash::AHashMap;

/// Indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Scans once, remembering the last index of each value seen so far, and
/// returns the first pair completed. Returns `None` when no pair exists.
///
/// # Examples
///
/// ```
/// use toolshed::algorithms::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: AHashMap<i64, usize> = AHashMap::with_capacity(nums.len());

    for (j, &value) in nums.iter().enumerate() {
        // An overflowing complement cannot be an i64 in the slice.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&i) = seen.get(&complement) {
                return Some((i, j));
            }
        }
        seen.insert(value, j);
    }

    None
}
