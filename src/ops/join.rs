/// Left-preserving equi-join: every left row survives, paired with the
/// right-side match when the lookup finds one.
///
/// The lookup side is a closure over a precomputed index, so joining stays
/// linear in the left collection.
pub fn left_join<L, R, I, F>(left: I, lookup: F) -> Vec<(L, Option<R>)>
where
    I: IntoIterator<Item = L>,
    F: Fn(&L) -> Option<R>,
{
    left.into_iter()
        .map(|l| {
            let r = lookup(&l);
            (l, r)
        })
        .collect()
}

/// Inner equi-join: left rows without a right-side match are dropped.
pub fn inner_join<L, R, I, F>(left: I, lookup: F) -> Vec<(L, R)>
where
    I: IntoIterator<Item = L>,
    F: Fn(&L) -> Option<R>,
{
    left.into_iter()
        .filter_map(|l| {
            let r = lookup(&l)?;
            Some((l, r))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn left_join_preserves_unmatched_rows() {
        let names: HashMap<u32, &str> = HashMap::from([(1, "one"), (3, "three")]);
        let joined = left_join(vec![1u32, 2, 3], |k| names.get(k).copied());
        assert_eq!(
            joined,
            vec![(1, Some("one")), (2, None), (3, Some("three"))]
        );
    }

    #[test]
    fn inner_join_drops_unmatched_rows() {
        let names: HashMap<u32, &str> = HashMap::from([(1, "one"), (3, "three")]);
        let joined = inner_join(vec![1u32, 2, 3], |k| names.get(k).copied());
        assert_eq!(joined, vec![(1, "one"), (3, "three")]);
    }
}
