use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered group-by.
///
/// Groups are keyed in a hash map for O(1) updates, but iteration follows
/// the order in which each key was first seen; a later sort (e.g. top-N) is
/// stable with respect to that order, which fixes tie-breaking.
pub struct Grouper<K, A> {
    order: Vec<K>,
    slots: HashMap<K, usize>,
    accumulators: Vec<A>,
}

impl<K, A> Grouper<K, A>
where
    K: Eq + Hash + Clone,
    A: Default,
{
    pub fn new() -> Self {
        Grouper {
            order: Vec::new(),
            slots: HashMap::new(),
            accumulators: Vec::new(),
        }
    }

    /// Fold one row into the accumulator for `key`, creating the group on
    /// first sight.
    pub fn update<F>(&mut self, key: K, fold: F)
    where
        F: FnOnce(&mut A),
    {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.accumulators.len();
                self.order.push(key.clone());
                self.slots.insert(key, slot);
                self.accumulators.push(A::default());
                slot
            }
        };
        fold(&mut self.accumulators[slot]);
    }

    pub fn get(&self, key: &K) -> Option<&A> {
        self.slots.get(key).map(|&slot| &self.accumulators[slot])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// One `(key, aggregate)` pair per distinct key, first-seen order.
    pub fn into_pairs(self) -> Vec<(K, A)> {
        self.order
            .into_iter()
            .zip(self.accumulators)
            .collect()
    }
}

impl<K, A> Default for Grouper<K, A>
where
    K: Eq + Hash + Clone,
    A: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric aggregate over one group: count, conditional count, sum, min,
/// max, average.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    pub count: u64,
    pub matched: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Aggregate {
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Conditional count; the predicate is evaluated by the caller.
    pub fn add_if(&mut self, matches: bool) {
        if matches {
            self.matched += 1;
        }
    }

    /// Average of the added values. A group that never saw a value reports
    /// `None`, not a misleading zero.
    pub fn avg(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}
