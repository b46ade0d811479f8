//! Net balance calculation: contributions -> signed balances -> worklists.
//!
//! The fair share is the arithmetic mean of all contributions. Each
//! participant's balance is `contribution − fair_share`; positive balances
//! become credit entries, negative ones become debt entries (by magnitude),
//! and exact zeros drop out entirely.
//!
//! Both output lists preserve the participants' original relative order.
//! This is deliberate: the matcher pairs entries in list order, so sorting
//! here would silently change the observable transfer sequence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use splitfair_types::{Contribution, CreditEntry, DebtEntry, Result, SplitfairError};

/// The balance calculator's output: the fair share plus the two ordered
/// worklists the matcher consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitBalances {
    /// Mean contribution across the group — what everyone "should" have paid.
    pub fair_share: Decimal,
    /// Overpayers, in input order, each owed `remaining` by the group.
    pub credits: Vec<CreditEntry>,
    /// Underpayers, in input order, each owing `remaining` to the group.
    pub debts: Vec<DebtEntry>,
}

impl SplitBalances {
    /// Total imbalance on the credit side. Equals [`Self::total_debt`] by
    /// construction of the mean (up to `Decimal` division precision).
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.credits.iter().map(|c| c.remaining).sum()
    }

    /// Total imbalance on the debt side.
    #[must_use]
    pub fn total_debt(&self) -> Decimal {
        self.debts.iter().map(|d| d.remaining).sum()
    }
}

/// Compute signed balances and split them into ordered credit/debt worklists.
///
/// # Errors
/// Returns [`SplitfairError::EmptyGroup`] if `contributions` is empty —
/// the mean is undefined for zero participants.
pub fn compute_balances(contributions: &[Contribution]) -> Result<SplitBalances> {
    if contributions.is_empty() {
        return Err(SplitfairError::EmptyGroup);
    }

    let total: Decimal = contributions.iter().map(|c| c.amount).sum();
    let fair_share = total / Decimal::from(contributions.len());

    let mut credits = Vec::new();
    let mut debts = Vec::new();

    for contribution in contributions {
        let balance = contribution.amount - fair_share;
        if balance > Decimal::ZERO {
            credits.push(CreditEntry::new(contribution.participant.clone(), balance));
        } else if balance < Decimal::ZERO {
            debts.push(DebtEntry::new(contribution.participant.clone(), -balance));
        }
        // balance == 0: already settled, excluded from both worklists
    }

    Ok(SplitBalances {
        fair_share,
        credits,
        debts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitfair_types::ParticipantId;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn contributions(input: &[(&str, i64)]) -> Vec<Contribution> {
        input
            .iter()
            .map(|(name, amount)| Contribution::new(*name, dec(*amount)))
            .collect()
    }

    #[test]
    fn empty_group_is_rejected() {
        let err = compute_balances(&[]).unwrap_err();
        assert_eq!(err, SplitfairError::EmptyGroup);
    }

    #[test]
    fn fair_share_is_the_mean() {
        let input = contributions(&[("Alice", 40), ("Bob", 20), ("Charlie", 0)]);
        let balances = compute_balances(&input).unwrap();
        assert_eq!(balances.fair_share, dec(20));
        // Mean invariant: fair_share × count == sum of contributions.
        assert_eq!(balances.fair_share * dec(3), dec(60));
    }

    #[test]
    fn zero_balance_participants_are_excluded() {
        let input = contributions(&[("Alice", 40), ("Bob", 20), ("Charlie", 0)]);
        let balances = compute_balances(&input).unwrap();
        // Bob paid exactly the fair share: no entry on either side.
        assert_eq!(balances.credits.len(), 1);
        assert_eq!(balances.debts.len(), 1);
        assert_eq!(balances.credits[0].participant, ParticipantId::new("Alice"));
        assert_eq!(balances.debts[0].participant, ParticipantId::new("Charlie"));
    }

    #[test]
    fn debt_entries_carry_magnitude_not_sign() {
        let input = contributions(&[("A", 0), ("B", 0), ("C", 90)]);
        let balances = compute_balances(&input).unwrap();
        assert_eq!(balances.debts[0].remaining, dec(30));
        assert_eq!(balances.debts[1].remaining, dec(30));
        assert_eq!(balances.credits[0].remaining, dec(60));
    }

    #[test]
    fn worklists_preserve_input_order_not_magnitude() {
        // P2 has a smaller credit than P3 but appears first in the input.
        let input = contributions(&[("P1", 0), ("P2", 50), ("P3", 100), ("P4", 10)]);
        let balances = compute_balances(&input).unwrap();
        let credit_ids: Vec<&str> = balances
            .credits
            .iter()
            .map(|c| c.participant.as_str())
            .collect();
        assert_eq!(credit_ids, vec!["P2", "P3"]);
        let debt_ids: Vec<&str> = balances
            .debts
            .iter()
            .map(|d| d.participant.as_str())
            .collect();
        assert_eq!(debt_ids, vec!["P1", "P4"]);
    }

    #[test]
    fn total_credit_equals_total_debt() {
        let input = contributions(&[
            ("P1", 300),
            ("P2", 150),
            ("P3", 200),
            ("P4", 100),
            ("P5", 50),
            ("P6", 70),
        ]);
        let balances = compute_balances(&input).unwrap();
        assert_eq!(balances.fair_share, dec(145));
        assert_eq!(balances.total_credit(), balances.total_debt());
        assert_eq!(balances.total_credit(), dec(215));
    }

    #[test]
    fn all_balanced_yields_empty_worklists() {
        let input = contributions(&[("P1", 10), ("P2", 10), ("P3", 10)]);
        let balances = compute_balances(&input).unwrap();
        assert!(balances.credits.is_empty());
        assert!(balances.debts.is_empty());
    }

    #[test]
    fn negative_contributions_flow_through_the_arithmetic() {
        // Negative amounts are not validated: they simply deepen the debt.
        let input = contributions(&[("A", -30), ("B", 30)]);
        let balances = compute_balances(&input).unwrap();
        assert_eq!(balances.fair_share, dec(0));
        assert_eq!(balances.debts[0].remaining, dec(30));
        assert_eq!(balances.credits[0].remaining, dec(30));
    }
}
