//! Error types for the cashpoint domain.

use thiserror::Error;

/// Errors raised while validating a configured denomination set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenominationError {
    #[error("denomination set is empty")]
    Empty,
    #[error("denomination must be positive: {0}")]
    NonPositive(i64),
    #[error("denominations must be strictly descending: {prev} then {next}")]
    NotDescending { prev: i64, next: i64 },
    #[error("not an integer note value: {0:?}")]
    NotANumber(String),
}

/// Errors raised by a withdrawal attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WithdrawError {
    /// The requested amount failed the divisibility pre-check.
    #[error("amount {amount} is not a positive multiple of {smallest}")]
    Ineligible {
        /// Requested amount.
        amount: i64,
        /// Smallest configured note, the eligibility divisor.
        smallest: i64,
    },

    /// The greedy walk could not represent the amount exactly.
    ///
    /// Reachable after a passing pre-check only when the configured set
    /// accepts amounts the greedy walk cannot compose; front-ends treat
    /// this as a server-side fault rather than a client error.
    #[error("amount {amount} cannot be dispensed with the configured notes")]
    Unrepresentable {
        /// Requested amount.
        amount: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ineligible() {
        let e = WithdrawError::Ineligible {
            amount: 15,
            smallest: 2,
        };
        assert_eq!(e.to_string(), "amount 15 is not a positive multiple of 2");
    }

    #[test]
    fn display_unrepresentable() {
        let e = WithdrawError::Unrepresentable { amount: 38 };
        assert_eq!(
            e.to_string(),
            "amount 38 cannot be dispensed with the configured notes"
        );
    }

    #[test]
    fn display_not_descending() {
        let e = DenominationError::NotDescending { prev: 50, next: 100 };
        assert_eq!(
            e.to_string(),
            "denominations must be strictly descending: 50 then 100"
        );
    }

    #[test]
    fn display_empty() {
        assert_eq!(
            DenominationError::Empty.to_string(),
            "denomination set is empty"
        );
    }

    #[test]
    fn clone_and_eq() {
        let e1 = WithdrawError::Unrepresentable { amount: 8 };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
