//! Ordered-collection stores modeled after a remote cache server's list and
//! sorted set commands.  The capability traits are the seam where a real
//! remote client would plug in; the implementations here keep the same
//! command semantics (inclusive range bounds, rank order) in process.

use thiserror::Error;


#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The read side the neighbor-lookup core depends on.  `range` bounds are
/// inclusive and must be concrete indices; the "-1 means end" sentinel some
/// servers accept is never used here.
pub trait OrderedCollection {
    type Item;

    fn len(&self) -> Result<usize, StoreError>;
    fn range(&self, start: usize, stop: usize) -> Result<Vec<Self::Item>, StoreError>;
}

/// Harness-facing capabilities on top of the read side.
pub trait Store: OrderedCollection {
    fn bulk_insert(&mut self, records: &[Self::Item]) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// List-backed variant: append order is index order, like RPUSH + LRANGE.
#[derive(Default)]
pub struct ListStore<T> {
    items: Vec<T>,
}

impl<T> ListStore<T> {
    pub fn new() -> Self {
        ListStore { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: Clone> OrderedCollection for ListStore<T> {
    type Item = T;

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.items.len())
    }

    fn range(&self, start: usize, stop: usize) -> Result<Vec<T>, StoreError> {
        Ok(range_of(&self.items, start, stop))
    }
}

impl<T: Clone> Store for ListStore<T> {
    fn bulk_insert(&mut self, records: &[T]) -> Result<(), StoreError> {
        for record in records {
            self.push(record.clone());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.items.clear();
        Ok(())
    }
}

/// Sorted-set variant: members are kept ordered by score, ties by insertion
/// order, like ZADD.  Rank order backs the `OrderedCollection` view.
#[derive(Default)]
pub struct SortedSetStore<T> {
    entries: Vec<(f64, T)>,
}

impl<T> SortedSetStore<T> {
    pub fn new() -> Self {
        SortedSetStore {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, member: T, score: f64) {
        let at = self.entries.partition_point(|(s, _)| *s <= score);
        self.entries.insert(at, (score, member));
    }

    /// ZRANGEBYSCORE with inclusive bounds.
    pub fn range_by_score(&self, min: f64, max: f64) -> Vec<&T> {
        let start = self.entries.partition_point(|(s, _)| *s < min);
        let stop = self.entries.partition_point(|(s, _)| *s <= max);
        self.entries[start..stop].iter().map(|(_, m)| m).collect()
    }
}

impl<T: Clone> OrderedCollection for SortedSetStore<T> {
    type Item = T;

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.len())
    }

    fn range(&self, start: usize, stop: usize) -> Result<Vec<T>, StoreError> {
        Ok(range_of(&self.entries, start, stop)
            .into_iter()
            .map(|(_, m)| m)
            .collect())
    }
}

impl<T: Clone> Store for SortedSetStore<T> {
    /// Scores records by their position in the input, matching a harness
    /// that loads `records[i]` with score `i`.
    fn bulk_insert(&mut self, records: &[T]) -> Result<(), StoreError> {
        for (i, record) in records.iter().enumerate() {
            self.add(record.clone(), i as f64);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}

fn range_of<T: Clone>(items: &[T], start: usize, stop: usize) -> Vec<T> {
    if start >= items.len() || stop < start {
        return Vec::new();
    }
    let stop = stop.min(items.len() - 1);
    items[start..=stop].to_vec()
}
