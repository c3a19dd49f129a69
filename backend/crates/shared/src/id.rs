//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Ids are creation epoch
//! milliseconds and travel as decimal strings (`"1714557600000"`), which is
//! the format already sitting in persisted storage.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AccessRequestId = Id<markers::AccessRequest>;
///
/// let id = AccessRequestId::from_millis(1_714_557_600_000);
/// assert_eq!(id.to_string(), "1714557600000");
/// ```
pub struct Id<T> {
    millis: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Id for something created at `millis` (Unix epoch ms)
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            millis,
            _marker: PhantomData,
        }
    }

    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// The smallest id that sorts strictly after `self`
    pub const fn successor(&self) -> Self {
        Self::from_millis(self.millis.saturating_add(1))
    }
}

// Manual impls: derives would put bounds on `T`, which is only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.millis == other.millis
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.millis.cmp(&other.millis)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.millis.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.millis)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::from_millis)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.millis)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor<T>(PhantomData<T>);

        impl<T> Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("epoch milliseconds as a decimal string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Id::from_millis(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v).map(Id::from_millis).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor(PhantomData))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for access request IDs
    pub struct AccessRequest;
}

/// Type aliases for common IDs
pub type AccessRequestId = Id<markers::AccessRequest>;
