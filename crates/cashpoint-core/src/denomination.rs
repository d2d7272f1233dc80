//! Validated banknote denomination sets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DenominationError;

/// Euro-style note values used when nothing else is configured.
pub const DEFAULT_NOTES: [i64; 7] = [200, 100, 50, 20, 10, 5, 2];

/// A fixed set of banknote values, strictly descending and positive.
///
/// The set is the single source of truth for withdrawals: the greedy
/// selector walks it largest-first, and the eligibility pre-check divides
/// by [`smallest`](Self::smallest).
///
/// # Examples
///
/// ```
/// use cashpoint_core::DenominationSet;
/// let set = DenominationSet::default();
/// assert_eq!(set.smallest(), 2);
/// assert!(set.is_eligible(80));
/// assert!(!set.is_eligible(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DenominationSet {
    values: Vec<i64>,
}

impl DenominationSet {
    /// Validate and build a set from note values.
    ///
    /// The input must be non-empty, every value positive, and the order
    /// strictly descending (which also rules out duplicates).
    pub fn new(values: Vec<i64>) -> Result<Self, DenominationError> {
        if values.is_empty() {
            return Err(DenominationError::Empty);
        }

        for &value in &values {
            if value <= 0 {
                return Err(DenominationError::NonPositive(value));
            }
        }

        for pair in values.windows(2) {
            if pair[1] >= pair[0] {
                return Err(DenominationError::NotDescending {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        Ok(Self { values })
    }

    /// Note values, largest first.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The smallest configured note; the eligibility divisor.
    pub fn smallest(&self) -> i64 {
        // Non-empty by construction.
        self.values[self.values.len() - 1]
    }

    /// Eligibility pre-check: a positive multiple of the smallest note.
    ///
    /// Advisory fast path; [`NoteSelector`](crate::NoteSelector) still
    /// verifies the exact-sum invariant on its own.
    pub fn is_eligible(&self, amount: i64) -> bool {
        amount > 0 && amount % self.smallest() == 0
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        // DEFAULT_NOTES is descending and positive; skip revalidation.
        Self {
            values: DEFAULT_NOTES.to_vec(),
        }
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for DenominationSet {
    type Err = DenominationError;

    /// Parse a comma-separated list of note values, e.g. `"200,100,50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let value = part
                .parse::<i64>()
                .map_err(|_| DenominationError::NotANumber(part.to_string()))?;
            values.push(value);
        }
        Self::new(values)
    }
}
