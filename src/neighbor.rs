//! Neighbor lookup over a remotely-stored ordered sequence.
//!
//! Given a target index, resolves the elements immediately before and after
//! it with a single bounded range fetch.  The window is three elements wide
//! in the interior and shrinks at the head and tail, so the cost is one
//! remote call regardless of collection size.

use crate::store::{OrderedCollection, StoreError};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum LookupError {
    /// Caller bug, raised before any store call.  `index == len` is invalid.
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Store failure, propagated unchanged.  Retry policy belongs to the
    /// caller's connection layer.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The range fetch returned a different number of elements than the
    /// window asked for.
    #[error("range fetch returned {actual} elements, expected {expected}")]
    MalformedResponse { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedValue<T> {
    pub index: usize,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborResult<T> {
    pub previous: Option<IndexedValue<T>>,
    pub next: Option<IndexedValue<T>>,
}

/// Resolves the neighbors of `target` in one range fetch.
///
/// Read-only and stateless; concurrent calls against the same collection are
/// safe, each consistent only with the length snapshot it observed.
pub fn lookup<C: OrderedCollection>(
    collection: &C,
    target: usize,
) -> Result<NeighborResult<C::Item>, LookupError> {
    let len = collection.len()?;
    if target >= len {
        return Err(LookupError::OutOfRange { index: target, len });
    }

    let start = if target == 0 { target } else { target - 1 };
    let stop = if target == len - 1 { target } else { target + 1 };

    let mut window = collection.range(start, stop)?;
    let expected = stop - start + 1;
    if window.len() != expected {
        return Err(LookupError::MalformedResponse {
            expected,
            actual: window.len(),
        });
    }

    // The target sits between its neighbors in the window, so the previous
    // element is always first and the next always last.
    let next = if target == len - 1 {
        None
    } else {
        Some(IndexedValue {
            index: target + 1,
            value: window.pop().expect("window is non-empty"),
        })
    };
    let previous = if target == 0 {
        None
    } else {
        Some(IndexedValue {
            index: target - 1,
            value: window.swap_remove(0),
        })
    };

    Ok(NeighborResult { previous, next })
}
