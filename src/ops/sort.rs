use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Stable top-N: sort descending by the metric, ties keep their original
/// relative order, truncate to `n`.
pub fn top_n_by<T, M, F>(mut rows: Vec<T>, n: usize, metric: F) -> Vec<T>
where
    M: PartialOrd,
    F: Fn(&T) -> M,
{
    // Vec::sort_by is stable, so equal metrics preserve insertion order.
    rows.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(Ordering::Equal)
    });
    rows.truncate(n);
    rows
}

/// For each group, the single row with the maximum ordering key.
///
/// Groups appear in first-seen order. Ties on the ordering key keep the
/// earlier row (should not occur in clean data).
pub fn last_per_group<'a, T, K, O, G, F>(
    rows: impl IntoIterator<Item = &'a T>,
    group: G,
    order: F,
) -> Vec<(K, &'a T)>
where
    K: Eq + Hash + Clone,
    O: PartialOrd,
    G: Fn(&T) -> K,
    F: Fn(&T) -> O,
{
    let mut picked: Vec<(K, &'a T)> = Vec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();

    for row in rows {
        let key = group(row);
        match slots.get(&key) {
            Some(&slot) => {
                if order(row) > order(picked[slot].1) {
                    picked[slot].1 = row;
                }
            }
            None => {
                slots.insert(key.clone(), picked.len());
                picked.push((key, row));
            }
        }
    }
    picked
}
