//! Maximum-sum path across a grid, left to right.
//!
//! A path starts in any cell of the first column and ends in any cell of the
//! last column. From `(row, col)` it steps to column `col + 1` on row
//! `row - 1`, `row` or `row + 1`.

use crate::error::{Result, ToolshedError};

/// Largest sum of any left-to-right path through `grid`.
///
/// Uses one running column of best sums, so extra space is O(rows).
///
/// # Errors
///
/// Returns an error if the grid has no rows, a row is empty, the rows have
/// different lengths, or a partial path sum does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use toolshed::algorithms::max_path_sum;
///
/// let grid = vec![vec![1, 3, 3], vec![2, 1, 4], vec![0, 6, 4]];
/// assert_eq!(max_path_sum(&grid).unwrap(), 12);
/// ```
pub fn max_path_sum(grid: &[Vec<i64>]) -> Result<i64> {
    let Some(first) = grid.first() else {
        return Err(ToolshedError::invalid_argument("grid has no rows"));
    };
    let cols = first.len();
    if cols == 0 {
        return Err(ToolshedError::invalid_argument("grid rows are empty"));
    }
    if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ToolshedError::invalid_argument(format!(
            "row {row} has {} cells, expected {cols}",
            cells.len()
        )));
    }

    let rows = grid.len();
    let mut best: Vec<i64> = grid.iter().map(|r| r[0]).collect();
    let mut next = vec![0i64; rows];

    for col in 1..cols {
        for row in 0..rows {
            let lo = row.saturating_sub(1);
            let hi = (row + 1).min(rows - 1);
            // `lo..=hi` always contains `row`, so the max exists.
            let reach = best[lo..=hi].iter().copied().max().unwrap_or(best[row]);
            next[row] = grid[row][col]
                .checked_add(reach)
                .ok_or_else(|| ToolshedError::invalid_argument("path sum overflows i64"))?;
        }
        std::mem::swap(&mut best, &mut next);
    }

    Ok(best.into_iter().max().unwrap_or(i64::MIN))
}
