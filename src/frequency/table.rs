use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::types::letter::Letter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrequencyTableError {
    #[error("Zero count stored for letter {0}")]
    ZeroCount(Letter),
}

/// Occurrence counts per letter.
///
/// Absent letters count as zero. Entries are kept in alphabetical order,
/// which is also the order selection scans them in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    inner: BTreeMap<Letter, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            inner: BTreeMap::new(),
        }
    }

    /// Count one more occurrence of `letter`.
    pub fn record(&mut self, letter: Letter) {
        *self.inner.entry(letter).or_insert(0) += 1;
    }

    // Used by counters that compute a whole count at once; zero counts are
    // not stored so every counter yields the same table.
    pub(crate) fn set(&mut self, letter: Letter, count: usize) {
        if count > 0 {
            self.inner.insert(letter, count);
        }
    }

    pub fn get(&self, letter: Letter) -> usize {
        self.inner.get(&letter).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, usize)> + '_ {
        self.inner.iter().map(|(letter, count)| (*letter, *count))
    }

    /// Number of distinct letters seen.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }
}

impl TryFrom<BTreeMap<Letter, usize>> for FrequencyTable {
    type Error = FrequencyTableError;

    fn try_from(inner: BTreeMap<Letter, usize>) -> Result<Self, Self::Error> {
        if let Some((letter, _)) = inner.iter().find(|(_, count)| **count == 0) {
            return Err(FrequencyTableError::ZeroCount(*letter));
        }
        Ok(FrequencyTable { inner })
    }
}

// Stored counts are always non-zero; selection relies on it.
impl<'de> Deserialize<'de> for FrequencyTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = BTreeMap::<Letter, usize>::deserialize(deserializer)?;
        FrequencyTable::try_from(inner).map_err(serde::de::Error::custom)
    }
}
