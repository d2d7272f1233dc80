//! High-level withdrawal entry point.

use tracing::debug;

use crate::denomination::DenominationSet;
use crate::error::WithdrawError;
use crate::selection::{NoteSelection, NoteSelector};
use crate::traits::Dispenser;

/// Production [`Dispenser`]: a validated denomination set plus the greedy
/// selector. Stateless and shareable across threads; each withdrawal is
/// an independent computation.
#[derive(Debug, Clone)]
pub struct Teller {
    denominations: DenominationSet,
}

impl Teller {
    pub fn new(denominations: DenominationSet) -> Self {
        Self { denominations }
    }
}

impl Default for Teller {
    fn default() -> Self {
        Self::new(DenominationSet::default())
    }
}

impl Dispenser for Teller {
    fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    fn is_eligible(&self, amount: i64) -> bool {
        self.denominations.is_eligible(amount)
    }

    fn withdraw(&self, amount: i64) -> Result<NoteSelection, WithdrawError> {
        if !self.is_eligible(amount) {
            return Err(WithdrawError::Ineligible {
                amount,
                smallest: self.denominations.smallest(),
            });
        }

        let selection = NoteSelector::select(amount, &self.denominations)?;
        debug!(amount, notes = selection.notes.len(), "withdrawal selected");
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdraw_happy_path() {
        let teller = Teller::default();
        let sel = teller.withdraw(80).unwrap();
        assert_eq!(sel.notes, vec![50, 20, 10]);
    }

    #[test]
    fn withdraw_rejects_odd_amount() {
        let teller = Teller::default();
        let err = teller.withdraw(15).unwrap_err();
        assert_eq!(
            err,
            WithdrawError::Ineligible {
                amount: 15,
                smallest: 2
            }
        );
    }

    #[test]
    fn withdraw_rejects_zero_and_negative() {
        let teller = Teller::default();
        assert!(matches!(
            teller.withdraw(0),
            Err(WithdrawError::Ineligible { amount: 0, .. })
        ));
        assert!(matches!(
            teller.withdraw(-100),
            Err(WithdrawError::Ineligible { amount: -100, .. })
        ));
    }

    #[test]
    fn withdraw_surfaces_unrepresentable() {
        // 38 passes the pre-check (even) but greedy strands a remainder.
        let teller = Teller::default();
        assert!(teller.is_eligible(38));
        let err = teller.withdraw(38).unwrap_err();
        assert_eq!(err, WithdrawError::Unrepresentable { amount: 38 });
    }

    #[test]
    fn withdraw_with_four_note_set() {
        let teller = Teller::new(DenominationSet::new(vec![100, 50, 20, 10]).unwrap());
        assert!(!teller.is_eligible(38));
        assert!(matches!(
            teller.withdraw(38),
            Err(WithdrawError::Ineligible { smallest: 10, .. })
        ));
        let sel = teller.withdraw(510).unwrap();
        assert_eq!(sel.notes.iter().sum::<i64>(), 510);
    }

    #[test]
    fn denominations_accessor_round_trips() {
        let set = DenominationSet::new(vec![20, 10]).unwrap();
        let teller = Teller::new(set.clone());
        assert_eq!(teller.denominations(), &set);
    }
}
