//! In-place insertion sort.

/// Sort `items` in ascending order of `key`.
///
/// The sort is stable: an element only moves in front of neighbours whose key
/// is strictly greater. Runs in O(n²) comparisons, O(n) for sorted input.
///
/// # Examples
///
/// ```
/// use toolshed::algorithms::insertion_sort_by_key;
///
/// let mut people = vec![("ana", 31), ("bia", 25), ("caio", 31), ("davi", 19)];
/// insertion_sort_by_key(&mut people, |p| p.1);
/// assert_eq!(people, vec![("davi", 19), ("bia", 25), ("ana", 31), ("caio", 31)]);
/// ```
pub fn insertion_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    for current in 1..items.len() {
        let current_key = key(&items[current]);
        let mut insert_at = current;

        while insert_at > 0 && key(&items[insert_at - 1]) > current_key {
            insert_at -= 1;
        }

        items[insert_at..=current].rotate_right(1);
    }
}

/// Sort `items` in ascending order.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    for current in 1..items.len() {
        let mut insert_at = current;

        while insert_at > 0 && items[insert_at - 1] > items[current] {
            insert_at -= 1;
        }

        items[insert_at..=current].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Track {
        title: &'static str,
        plays: u32,
    }

    #[test]
    fn test_sort_numbers() {
        let mut values = vec![5, 2, 9, 1, 5, 6];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        insertion_sort_by_key(&mut single, |v| *v);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_sort_by_key_is_stable() {
        let mut tracks = vec![
            Track { title: "b", plays: 3 },
            Track { title: "a", plays: 1 },
            Track { title: "c", plays: 3 },
            Track { title: "d", plays: 1 },
        ];
        insertion_sort_by_key(&mut tracks, |t| t.plays);

        let titles: Vec<&str> = tracks.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_sort_by_string_key() {
        let mut words = vec!["pear", "fig", "apple"];
        insertion_sort_by_key(&mut words, |w| w.to_string());
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_sort_floats() {
        let mut values = vec![2.5, -1.0, 0.0, 2.25];
        insertion_sort(&mut values);
        assert_eq!(values, vec![-1.0, 0.0, 2.25, 2.5]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut values: Vec<u32> = (0..50).rev().collect();
        insertion_sort(&mut values);
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }
}
