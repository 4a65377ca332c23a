use std::fmt;

use super::{DiscreteDomain, KeyRange};
use crate::error::{MasterDataError, Result};

/// Ordered range map whose ranges abut with no gaps
///
/// Every range but the last is closed, and each range starts at the
/// successor of the previous range's end. Together the ranges partition
/// `[first.start, last.end]` (or `[first.start, +inf)` when the last range
/// is unbounded), so any key inside that span has exactly one value.
///
/// Used for per-instrument timelines, where an instrument always has exactly
/// one symbol from its first recorded day onwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContiguousDiscreteRangeMap<K, V> {
    entries: Vec<(KeyRange<K>, V)>,
}

impl<K, V> ContiguousDiscreteRangeMap<K, V>
where
    K: DiscreteDomain + fmt::Debug,
{
    /// Build from parallel lists of ranges and values, ordered by start
    pub fn new(ranges: Vec<KeyRange<K>>, values: Vec<V>) -> Result<Self> {
        if ranges.len() != values.len() {
            return Err(MasterDataError::LengthMismatch {
                ranges: ranges.len(),
                values: values.len(),
            });
        }
        Self::from_entries(ranges.into_iter().zip(values).collect())
    }

    /// Build from `(range, value)` pairs, ordered by start
    pub fn from_entries(entries: Vec<(KeyRange<K>, V)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MasterDataError::EmptyRangeMap);
        }
        for (range, _) in &entries {
            range.validate()?;
        }

        // With every range well-formed, abutting also means sorted by start
        for (position, pair) in entries.windows(2).enumerate() {
            let (previous, _) = &pair[0];
            let (next, _) = &pair[1];

            let Some(previous_end) = previous.end() else {
                return Err(MasterDataError::UnboundedNotLast {
                    range: previous.to_string(),
                    position,
                });
            };

            if previous_end.successor().as_ref() != Some(next.start()) {
                return Err(MasterDataError::NotContiguous {
                    previous: previous.to_string(),
                    next: next.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Map with a single range
    pub fn single(range: KeyRange<K>, value: V) -> Result<Self> {
        range.validate()?;
        Ok(Self {
            entries: vec![(range, value)],
        })
    }

    /// Value of the range containing `key`
    ///
    /// Returns `None` before the first range starts, and past the end of the
    /// last range when that range is closed.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self
            .entries
            .partition_point(|(range, _)| range.start() <= key);
        if idx == 0 {
            return None;
        }
        let (range, value) = &self.entries[idx - 1];
        range.contains(key).then_some(value)
    }

    pub fn first_range(&self) -> &KeyRange<K> {
        &self.entries[0].0
    }

    pub fn last_range(&self) -> &KeyRange<K> {
        &self.last_entry().0
    }

    /// Value of the final range
    pub fn last_value(&self) -> &V {
        &self.last_entry().1
    }

    fn last_entry(&self) -> &(KeyRange<K>, V) {
        // non-empty by construction
        &self.entries[self.entries.len() - 1]
    }
}

impl<K, V> ContiguousDiscreteRangeMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyRange<K>, &V)> {
        self.entries.iter().map(|(range, value)| (range, value))
    }

    pub fn ranges(&self) -> impl Iterator<Item = &KeyRange<K>> {
        self.entries.iter().map(|(range, _)| range)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}
