//! Timemap - an in-memory map keyed by time intervals.
//!
//! Values are stored against inclusive intervals whose start or end may be
//! left open. Looking up a point in time returns the value of the most
//! recently inserted interval that contains it, so later intervals are
//! layered on top of earlier ones.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{Duration, Utc};
//! use timemap::TimeMap;
//!
//! let today = Utc::now();
//! let yesterday = today - Duration::days(1);
//! let tomorrow = today + Duration::days(1);
//!
//! let map = TimeMap::new();
//!
//! // No begin time
//! map.add_until(tomorrow, "up to tomorrow").unwrap();
//! assert_eq!(map.get(&today), "up to tomorrow");
//!
//! // Starting yesterday
//! map.add_from(yesterday, "since yesterday").unwrap();
//! assert_eq!(map.get_ok(&today), Some("since yesterday"));
//!
//! // An explicit interval, removed again by id
//! let id = map.add_range(yesterday, tomorrow, "these days").unwrap();
//! assert_eq!(map.get_ok(&today), Some("these days"));
//!
//! map.remove_interval_id(id).unwrap();
//! assert_eq!(map.get_ok(&today), Some("since yesterday"));
//! ```
//!
//! Rejected intervals:
//!
//! ```
//! use chrono::{Duration, Utc};
//! use timemap::{TimeMap, TimeMapError};
//!
//! let today = Utc::now();
//! let yesterday = today - Duration::days(1);
//! let tomorrow = today + Duration::days(1);
//!
//! let map = TimeMap::new();
//! assert!(map.add_always("all of time").is_ok());
//! assert!(map.add_range(yesterday, tomorrow, "finite range").is_ok());
//! assert!(map.add_from(tomorrow, "tomorrow and forever").is_ok());
//!
//! let err = map.add_range(tomorrow, yesterday, "backwards").unwrap_err();
//! assert_eq!(err, TimeMapError::InvalidRange);
//! ```

pub mod error;
pub mod interval;
pub mod map;

pub use error::Result;
pub use error::TimeMapError;
pub use interval::Interval;
pub use interval::IntervalId;
pub use map::TimeMap;
