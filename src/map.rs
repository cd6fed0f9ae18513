//! The interval map.
//!
//! A `TimeMap` holds any number of possibly overlapping intervals. A lookup
//! at time `t` considers every live interval containing `t` and answers with
//! the payload of the one inserted last, so newer intervals shadow older ones
//! wherever they overlap.
//!
//! The id counter and the interval table sit behind one `RwLock`. Lookups
//! share the lock; insertion, removal and clearing take it exclusively.
//!
//! Complexity:
//! - add_interval: O(1) amortized
//! - get / get_ok / resolve: O(n), one pass over the live intervals
//! - remove_interval_id: O(1)
//! - clear: O(n)

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::error::TimeMapError;
use crate::interval::Interval;
use crate::interval::IntervalId;

#[derive(Debug)]
struct Inner<T, V> {
    /// Last issued id. Never reset.
    counter: u64,
    /// Live intervals. Iteration order is arbitrary.
    intervals: FxHashMap<IntervalId, Interval<T, V>>,
}

/// A map from inclusive time intervals to values.
///
/// `T` is the timestamp type and only needs a total order. `V` is an opaque
/// payload; the map never inspects it.
///
/// All methods take `&self`, so a map can be shared across threads behind an
/// `Arc`.
#[derive(Debug)]
pub struct TimeMap<T, V> {
    inner: RwLock<Inner<T, V>>,
}

impl<T, V> Default for TimeMap<T, V> {
    fn default() -> TimeMap<T, V> {
        return TimeMap::new();
    }
}

impl<T, V> TimeMap<T, V> {
    /// Create an empty map.
    pub fn new() -> TimeMap<T, V> {
        return TimeMap::with_capacity(0);
    }

    /// Create an empty map with room for `capacity` intervals.
    pub fn with_capacity(capacity: usize) -> TimeMap<T, V> {
        let inner = Inner {
            counter: 0,
            intervals: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        };
        return TimeMap { inner: RwLock::new(inner) };
    }

    /// Number of live intervals.
    pub fn len(&self) -> usize {
        return self.inner.read().intervals.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// The most recently issued id, or `IntervalId::NONE` if nothing has been
    /// inserted yet. Not affected by removal or clearing.
    pub fn last_id(&self) -> IntervalId {
        return IntervalId::from(self.inner.read().counter);
    }

    /// Remove the interval with the given id.
    ///
    /// Fails with `InvalidIdentifier` for the zero id and with `NotFound` if
    /// no live interval has this id. Other intervals keep their ids.
    pub fn remove_interval_id(&self, id: IntervalId) -> Result<()> {
        let mut inner = self.inner.write();

        if id.is_none() {
            return Err(TimeMapError::InvalidIdentifier);
        }

        if inner.intervals.remove(&id).is_none() {
            return Err(TimeMapError::NotFound(id));
        }

        tracing::trace!(%id, live = inner.intervals.len(), "removed interval");
        return Ok(());
    }

    /// Remove every interval.
    ///
    /// The id counter keeps running, so ids stay unique across clears.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let dropped = inner.intervals.len();
        inner.intervals.clear();
        tracing::trace!(dropped, last_id = inner.counter, "cleared intervals");
    }
}

impl<T: Ord, V> TimeMap<T, V> {
    /// Insert `payload` for the inclusive interval `[start, end]`.
    ///
    /// A `None` bound leaves that side open. Returns the id of the new
    /// interval, which can later be passed to [`remove_interval_id`].
    ///
    /// Fails with `InvalidRange` if both bounds are given and `end < start`.
    /// A failed insertion does not use up an id.
    ///
    /// [`remove_interval_id`]: TimeMap::remove_interval_id
    pub fn add_interval(&self, start: Option<T>, end: Option<T>, payload: V) -> Result<IntervalId> {
        let mut inner = self.inner.write();

        let id = IntervalId::from(inner.counter + 1);
        let interval = Interval::new(id, start, end, payload)?;

        inner.counter = id.get();
        inner.intervals.insert(id, interval);

        tracing::trace!(%id, live = inner.intervals.len(), "added interval");
        return Ok(id);
    }

    /// Insert `payload` for `[start, end]`.
    pub fn add_range(&self, start: T, end: T, payload: V) -> Result<IntervalId> {
        return self.add_interval(Some(start), Some(end), payload);
    }

    /// Insert `payload` for `[start, +inf)`.
    pub fn add_from(&self, start: T, payload: V) -> Result<IntervalId> {
        return self.add_interval(Some(start), None, payload);
    }

    /// Insert `payload` for `(-inf, end]`.
    pub fn add_until(&self, end: T, payload: V) -> Result<IntervalId> {
        return self.add_interval(None, Some(end), payload);
    }

    /// Insert `payload` for all of time.
    pub fn add_always(&self, payload: V) -> Result<IntervalId> {
        return self.add_interval(None, None, payload);
    }
}

impl<T: Ord, V: Clone> TimeMap<T, V> {
    /// Find the interval that decides the value at `at`.
    ///
    /// Among all live intervals containing `at`, the one with the highest id
    /// wins. Returns its id and a clone of its payload.
    pub fn resolve(&self, at: &T) -> Option<(IntervalId, V)> {
        let inner = self.inner.read();

        let mut best: Option<&Interval<T, V>> = None;
        for interval in inner.intervals.values() {
            if !interval.contains(at) {
                continue;
            }
            // Storage order is arbitrary, so compare ids rather than taking the last match.
            if best.is_none_or(|b| interval.id() > b.id()) {
                best = Some(interval);
            }
        }

        return best.map(|interval| (interval.id(), interval.payload().clone()));
    }

    /// Look up the value at `at`, or `None` if no interval contains it.
    pub fn get_ok(&self, at: &T) -> Option<V> {
        return self.resolve(at).map(|(_, payload)| payload);
    }
}

impl<T: Ord, V: Clone + Default> TimeMap<T, V> {
    /// Look up the value at `at`, falling back to `V::default()`.
    pub fn get(&self, at: &T) -> V {
        return self.get_ok(at).unwrap_or_default();
    }
}
