//! Residual imbalance check after a matching run.
//!
//! Invariant checked after every settlement:
//! ```text
//! ∀ entry: remaining == 0   (within RESIDUAL_EPSILON)
//! ```
//!
//! Internal arithmetic is exact `Decimal`, but a non-terminating fair
//! share (e.g. 100/3) leaves opposing worklists a few units apart in the
//! last representable decimal place. Anything beyond the epsilon means
//! value was silently dropped and is surfaced as a warning — diagnostic,
//! never fatal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use splitfair_types::constants::RESIDUAL_EPSILON;
use splitfair_types::{CreditEntry, DebtEntry};

/// Leftover value on each side of the worklists after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualReport {
    /// Sum of credit still unabsorbed across all creditors.
    pub credit_residual: Decimal,
    /// Sum of debt still unpaid across all debtors.
    pub debt_residual: Decimal,
}

impl ResidualReport {
    /// Whether both sides drained to zero within `epsilon`.
    #[must_use]
    pub fn is_settled(&self, epsilon: Decimal) -> bool {
        self.credit_residual.abs() <= epsilon && self.debt_residual.abs() <= epsilon
    }

    /// Emit a `tracing` warning if either side exceeds the default epsilon.
    pub fn warn_if_unsettled(&self) {
        if !self.is_settled(RESIDUAL_EPSILON) {
            tracing::warn!(
                credit_residual = %self.credit_residual,
                debt_residual = %self.debt_residual,
                "Residual imbalance after settlement: value beyond rounding tolerance left undistributed"
            );
        }
    }
}

/// Sum the leftover value on both worklists.
#[must_use]
pub fn check_residuals(credits: &[CreditEntry], debts: &[DebtEntry]) -> ResidualReport {
    ResidualReport {
        credit_residual: credits.iter().map(|c| c.remaining).sum(),
        debt_residual: debts.iter().map(|d| d.remaining).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drained_worklists_are_settled() {
        let credits = vec![CreditEntry::new("A", Decimal::ZERO)];
        let debts = vec![DebtEntry::new("B", Decimal::ZERO)];
        let report = check_residuals(&credits, &debts);
        assert!(report.is_settled(RESIDUAL_EPSILON));
    }

    #[test]
    fn sub_epsilon_residue_is_tolerated() {
        // One unit in the 26th decimal place — a representation artifact.
        let credits = vec![CreditEntry::new("A", Decimal::new(1, 26))];
        let report = check_residuals(&credits, &[]);
        assert!(report.is_settled(RESIDUAL_EPSILON));
    }

    #[test]
    fn real_leftover_is_flagged() {
        let debts = vec![DebtEntry::new("B", Decimal::new(5, 2))]; // 0.05
        let report = check_residuals(&[], &debts);
        assert!(!report.is_settled(RESIDUAL_EPSILON));
        assert_eq!(report.debt_residual, Decimal::new(5, 2));
    }

    #[test]
    fn residuals_sum_across_entries() {
        let credits = vec![
            CreditEntry::new("A", Decimal::new(1, 1)),
            CreditEntry::new("B", Decimal::new(2, 1)),
        ];
        let report = check_residuals(&credits, &[]);
        assert_eq!(report.credit_residual, Decimal::new(3, 1));
    }
}
