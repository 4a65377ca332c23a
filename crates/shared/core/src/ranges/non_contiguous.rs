use std::fmt;

use super::KeyRange;
use crate::error::{MasterDataError, Result};

/// Ordered range map whose ranges never overlap but may leave gaps
///
/// At most one range is unbounded above, and it sorts last. Lookups never
/// extend past a covered range: a key in a gap, before the first range, or
/// after a closed last range has no value.
///
/// Used for the symbol index, where a ticker may sit unused for a while and
/// later be reassigned to a different instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonContiguousRangeMap<K, V> {
    entries: Vec<(KeyRange<K>, V)>,
}

impl<K, V> NonContiguousRangeMap<K, V>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
{
    /// Build from parallel lists of ranges and values
    pub fn new(ranges: Vec<KeyRange<K>>, values: Vec<V>) -> Result<Self> {
        if ranges.len() != values.len() {
            return Err(MasterDataError::LengthMismatch {
                ranges: ranges.len(),
                values: values.len(),
            });
        }
        Self::from_entries(ranges.into_iter().zip(values).collect())
    }

    /// Build from `(range, value)` pairs in any order
    ///
    /// Entries are sorted by range start; the sort is stable so entries that
    /// already arrive in order keep it.
    pub fn from_entries(mut entries: Vec<(KeyRange<K>, V)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MasterDataError::EmptyRangeMap);
        }
        for (range, _) in &entries {
            range.validate()?;
        }

        entries.sort_by(|(a, _), (b, _)| a.start().cmp(b.start()));

        // After sorting, an unbounded range that is not last always overlaps
        // its successor, so the overlap check also enforces "unbounded last".
        for pair in entries.windows(2) {
            let (previous, previous_value) = &pair[0];
            let (next, next_value) = &pair[1];

            if previous.overlaps(next) {
                return Err(MasterDataError::Overlap {
                    first: format!("{} -> {:?}", previous, previous_value),
                    second: format!("{} -> {:?}", next, next_value),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Map with one closed range
    pub fn with_end(start: K, end: K, value: V) -> Result<Self> {
        Ok(Self {
            entries: vec![(KeyRange::with_end(start, end)?, value)],
        })
    }

    /// Map with one range unbounded above
    pub fn with_no_end(start: K, value: V) -> Self {
        Self {
            entries: vec![(KeyRange::with_no_end(start), value)],
        }
    }

    /// Value of the range containing `key`, if any
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
}

impl<K, V> NonContiguousRangeMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyRange<K>, &V)> {
        self.entries.iter().map(|(range, value)| (range, value))
    }
}

/// Accumulates ranges for a [`NonContiguousRangeMap`] before validation
#[derive(Debug, Clone)]
pub struct NonContiguousRangeMapBuilder<K, V> {
    entries: Vec<(KeyRange<K>, V)>,
}

impl<K, V> NonContiguousRangeMapBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, range: KeyRange<K>, value: V) -> &mut Self {
        self.entries.push((range, value));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> NonContiguousRangeMapBuilder<K, V>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
{
    pub fn build(self) -> Result<NonContiguousRangeMap<K, V>> {
        NonContiguousRangeMap::from_entries(self.entries)
    }
}

impl<K, V> Default for NonContiguousRangeMapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
