//! Greedy largest-first note selection.
//!
//! Walks the denomination set from largest to smallest, taking each note
//! as many times as it still fits. The exact emission order and note
//! counts are part of the observable contract; this is complete (finds a
//! combination whenever one exists) only for canonical note systems, so
//! the selector re-checks the exact-sum invariant rather than trusting
//! the eligibility pre-check.

use serde::Serialize;

use crate::denomination::DenominationSet;
use crate::error::WithdrawError;

/// Result of note selection: the notes to dispense, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSelection {
    /// Notes to hand out, non-increasing in value.
    pub notes: Vec<i64>,
    /// Sum of `notes`; always equals the requested amount.
    pub total: i64,
}

/// Greedy banknote selector.
pub struct NoteSelector;

impl NoteSelector {
    /// Select notes summing exactly to `amount`.
    ///
    /// Fails with [`WithdrawError::Unrepresentable`] when the walk leaves
    /// a non-zero remainder or selects nothing at all; zero and negative
    /// amounts always fail.
    pub fn select(
        amount: i64,
        denominations: &DenominationSet,
    ) -> Result<NoteSelection, WithdrawError> {
        // A non-positive amount must never produce a vacuous success.
        if amount <= 0 {
            return Err(WithdrawError::Unrepresentable { amount });
        }

        let mut notes = Vec::new();
        let mut remaining = amount;

        for &note in denominations.values() {
            while remaining >= note {
                notes.push(note);
                remaining -= note;
            }
            if remaining == 0 {
                break;
            }
        }

        if remaining != 0 || notes.is_empty() {
            return Err(WithdrawError::Unrepresentable { amount });
        }

        Ok(NoteSelection {
            notes,
            total: amount,
        })
    }
}
