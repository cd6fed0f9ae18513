//! Interval records and the membership test.
//!
//! An interval is a pair of optional bounds plus a payload. A missing start
//! means the interval reaches back without limit, a missing end means it
//! reaches forward without limit. Both bounds are inclusive.
//!
//! Complexity:
//! - contains: O(1)

use std::fmt;

use crate::error::Result;
use crate::error::TimeMapError;

/// Identifier of a stored interval.
///
/// Issued by [`TimeMap`](crate::TimeMap) in strictly increasing order, so a
/// larger id always means a later insertion. Zero is reserved and never issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId(u64);

impl IntervalId {
    /// The reserved "no identifier" value.
    pub const NONE: IntervalId = IntervalId(0);

    /// Get the raw identifier value.
    #[inline]
    pub fn get(&self) -> u64 {
        return self.0;
    }

    /// Check if this is the reserved zero value.
    #[inline]
    pub fn is_none(&self) -> bool {
        return self.0 == 0;
    }
}

impl From<u64> for IntervalId {
    fn from(raw: u64) -> IntervalId {
        return IntervalId(raw);
    }
}

impl From<IntervalId> for u64 {
    fn from(id: IntervalId) -> u64 {
        return id.0;
    }
}

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// A stored interval: inclusive bounds, a payload, and its identifier.
///
/// Immutable once created. The bounds are owned by the interval, so nothing
/// the caller does to its own timestamps afterwards can reach them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval<T, V> {
    id: IntervalId,
    start: Option<T>,
    end: Option<T>,
    payload: V,
}

impl<T: Ord, V> Interval<T, V> {
    /// Check that `start <= end` when both are present.
    pub fn validate(start: Option<&T>, end: Option<&T>) -> Result<()> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(TimeMapError::InvalidRange);
            }
        }
        return Ok(());
    }

    /// Create an interval, rejecting an end before the start.
    pub(crate) fn new(id: IntervalId, start: Option<T>, end: Option<T>, payload: V) -> Result<Interval<T, V>> {
        Interval::<T, V>::validate(start.as_ref(), end.as_ref())?;
        return Ok(Interval { id, start, end, payload });
    }

    /// Check whether `at` lies within the bounds.
    #[inline]
    pub fn contains(&self, at: &T) -> bool {
        let after_start = match &self.start {
            Some(start) => at >= start,
            None => true,
        };
        let before_end = match &self.end {
            Some(end) => at <= end,
            None => true,
        };
        return after_start && before_end;
    }
}

impl<T, V> Interval<T, V> {
    /// The identifier assigned at insertion.
    #[inline]
    pub fn id(&self) -> IntervalId {
        return self.id;
    }

    /// The inclusive lower bound, `None` if unbounded.
    #[inline]
    pub fn start(&self) -> Option<&T> {
        return self.start.as_ref();
    }

    /// The inclusive upper bound, `None` if unbounded.
    #[inline]
    pub fn end(&self) -> Option<&T> {
        return self.end.as_ref();
    }

    #[inline]
    pub fn payload(&self) -> &V {
        return &self.payload;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: Option<i64>, end: Option<i64>) -> Interval<i64, ()> {
        return Interval::new(IntervalId::from(1), start, end, ()).unwrap();
    }

    #[test]
    fn contains_bounded_is_inclusive() {
        let i = iv(Some(1), Some(3));
        assert!(!i.contains(&0));
        assert!(i.contains(&1));
        assert!(i.contains(&2));
        assert!(i.contains(&3));
        assert!(!i.contains(&4));
    }

    #[test]
    fn contains_unbounded_start() {
        let i = iv(None, Some(3));
        assert!(i.contains(&i64::MIN));
        assert!(i.contains(&3));
        assert!(!i.contains(&4));
    }

    #[test]
    fn contains_unbounded_end() {
        let i = iv(Some(3), None);
        assert!(!i.contains(&2));
        assert!(i.contains(&3));
        assert!(i.contains(&i64::MAX));
    }

    #[test]
    fn contains_unbounded_both() {
        let i = iv(None, None);
        assert!(i.contains(&i64::MIN));
        assert!(i.contains(&0));
        assert!(i.contains(&i64::MAX));
    }

    #[test]
    fn single_instant() {
        let i = iv(Some(5), Some(5));
        assert!(!i.contains(&4));
        assert!(i.contains(&5));
        assert!(!i.contains(&6));
    }

    #[test]
    fn end_before_start_rejected() {
        let result = Interval::new(IntervalId::from(1), Some(3), Some(1), ());
        assert_eq!(result, Err(TimeMapError::InvalidRange));
    }

    #[test]
    fn validate_one_sided() {
        assert!(Interval::<i64, ()>::validate(Some(&10), None).is_ok());
        assert!(Interval::<i64, ()>::validate(None, Some(&-10)).is_ok());
        assert!(Interval::<i64, ()>::validate(None, None).is_ok());
    }

    #[test]
    fn accessors() {
        let i = Interval::new(IntervalId::from(9), Some(1), None, "x").unwrap();
        assert_eq!(i.id(), IntervalId::from(9));
        assert_eq!(i.start(), Some(&1));
        assert_eq!(i.end(), None);
        assert_eq!(*i.payload(), "x");
    }

    #[test]
    fn id_none() {
        assert!(IntervalId::NONE.is_none());
        assert!(IntervalId::default().is_none());
        assert!(!IntervalId::from(1).is_none());
        assert_eq!(u64::from(IntervalId::from(42)), 42);
        assert_eq!(IntervalId::from(42).get(), 42);
    }

    #[test]
    fn id_ordering_follows_issue_order() {
        assert!(IntervalId::from(1) < IntervalId::from(2));
        assert!(IntervalId::NONE < IntervalId::from(1));
    }
}
