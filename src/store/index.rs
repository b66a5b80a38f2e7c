use std::collections::HashMap;
use std::hash::Hash;

/// Build a primary-key index: key → row offset.
///
/// When the source data carries duplicate keys the first row wins, matching
/// the first-match semantics of the lookup accessors.
pub fn primary_index<T, K, F>(rows: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        index.entry(key(row)).or_insert(offset);
    }
    index
}

/// Build a foreign-key index: key → row offsets in insertion order.
pub fn foreign_index<T, K, F>(rows: &[T], key: F) -> HashMap<K, Vec<usize>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, Vec<usize>> = HashMap::new();
    for (offset, row) in rows.iter().enumerate() {
        index.entry(key(row)).or_default().push(offset);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_index_keeps_first_duplicate() {
        let rows = vec![(1, "a"), (2, "b"), (1, "c")];
        let index = primary_index(&rows, |r| r.0);
        assert_eq!(index[&1], 0);
        assert_eq!(index[&2], 1);
    }

    #[test]
    fn foreign_index_preserves_insertion_order() {
        let rows = vec![(7, "x"), (9, "y"), (7, "z")];
        let index = foreign_index(&rows, |r| r.0);
        assert_eq!(index[&7], vec![0, 2]);
        assert_eq!(index[&9], vec![1]);
        assert!(index.get(&8).is_none());
    }
}
