use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MasterDataError, Result};
use crate::values::Date;

/// Validity range of a fact
///
/// Only two shapes exist: closed `[start, end]` and half-open-above
/// `[start, +inf)`. Open, half-open-below and all-time ranges cannot be
/// represented.
///
/// Deserialization goes through [`KeyRange::with_end`], so an inverted
/// closed range never comes out of JSON. Values built from the variants
/// directly are checked again by the range maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "snake_case",
    try_from = "RawKeyRange<K>",
    bound(deserialize = "K: Deserialize<'de> + Ord + fmt::Debug")
)]
pub enum KeyRange<K> {
    /// Closed range `[start, end]`
    WithEnd { start: K, end: K },
    /// Unbounded above `[start, +inf)`
    WithNoEnd { start: K },
}

/// Wire shape of [`KeyRange`], before bounds are checked
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawKeyRange<K> {
    WithEnd { start: K, end: K },
    WithNoEnd { start: K },
}

impl<K: Ord + fmt::Debug> TryFrom<RawKeyRange<K>> for KeyRange<K> {
    type Error = MasterDataError;

    fn try_from(raw: RawKeyRange<K>) -> Result<Self> {
        match raw {
            RawKeyRange::WithEnd { start, end } => KeyRange::with_end(start, end),
            RawKeyRange::WithNoEnd { start } => Ok(KeyRange::with_no_end(start)),
        }
    }
}

/// Validity range over calendar dates
pub type DateRange = KeyRange<Date>;

impl<K: Ord + fmt::Debug> KeyRange<K> {
    /// Closed range; fails if `start > end`
    pub fn with_end(start: K, end: K) -> Result<Self> {
        if start > end {
            return Err(MasterDataError::InvalidRange {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }
        Ok(KeyRange::WithEnd { start, end })
    }

    /// Fails if a closed range has `start > end`
    pub fn validate(&self) -> Result<()> {
        match self {
            KeyRange::WithEnd { start, end } if start > end => Err(MasterDataError::InvalidRange {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            }),
            _ => Ok(()),
        }
    }

    /// Range starting at `start` with no upper bound
    pub fn with_no_end(start: K) -> Self {
        KeyRange::WithNoEnd { start }
    }

    pub fn start(&self) -> &K {
        match self {
            KeyRange::WithEnd { start, .. } | KeyRange::WithNoEnd { start } => start,
        }
    }

    /// Upper bound, `None` when unbounded
    pub fn end(&self) -> Option<&K> {
        match self {
            KeyRange::WithEnd { end, .. } => Some(end),
            KeyRange::WithNoEnd { .. } => None,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, KeyRange::WithEnd { .. })
    }

    pub fn contains(&self, key: &K) -> bool {
        match self {
            KeyRange::WithEnd { start, end } => start <= key && key <= end,
            KeyRange::WithNoEnd { start } => start <= key,
        }
    }

    /// True if `key` lies strictly above the upper bound
    pub fn is_before(&self, key: &K) -> bool {
        self.end().is_some_and(|end| end < key)
    }

    pub fn overlaps(&self, other: &KeyRange<K>) -> bool {
        let starts_before_other_ends = match other.end() {
            Some(end) => self.start() <= end,
            None => true,
        };
        let other_starts_before_end = match self.end() {
            Some(end) => other.start() <= end,
            None => true,
        };
        starts_before_other_ends && other_starts_before_end
    }
}

impl<K: fmt::Debug> fmt::Display for KeyRange<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRange::WithEnd { start, end } => write!(f, "[{:?}..{:?}]", start, end),
            KeyRange::WithNoEnd { start } => write!(f, "[{:?}..+inf)", start),
        }
    }
}
