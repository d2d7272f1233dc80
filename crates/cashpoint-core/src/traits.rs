//! Trait seam between the domain and its front-ends.

use crate::denomination::DenominationSet;
use crate::error::WithdrawError;
use crate::selection::NoteSelection;

/// A cash dispenser capable of answering withdrawal requests.
///
/// The HTTP layer consumes this as `Arc<dyn Dispenser>` so that tests can
/// substitute scripted implementations for the production
/// [`Teller`](crate::Teller).
#[cfg_attr(test, mockall::automock)]
pub trait Dispenser: Send + Sync {
    /// The configured note values, largest first.
    fn denominations(&self) -> &DenominationSet;

    /// Fast eligibility pre-check: positive multiple of the smallest note.
    fn is_eligible(&self, amount: i64) -> bool;

    /// Select the notes for a withdrawal.
    fn withdraw(&self, amount: i64) -> Result<NoteSelection, WithdrawError>;
}
