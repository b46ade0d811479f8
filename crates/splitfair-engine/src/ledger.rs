//! Expense ledger: fold recorded expenses into net contributions.
//!
//! Upstream of the settlement engine, the application records expenses —
//! who paid the bill and how it splits across participants. This module
//! performs the netting step in memory: per participant,
//! `(Σ amounts paid) − (Σ shares owed)`, producing the [`Contribution`]
//! list the engine consumes. Persistence of expenses stays with the
//! caller; this is pure arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use splitfair_types::constants::DISPLAY_DECIMALS;
use splitfair_types::{Contribution, ParticipantId, Result, SplitfairError};

/// One participant's portion of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub participant: ParticipantId,
    pub amount: Decimal,
}

/// A single recorded expense: one payer covered the whole amount, and the
/// shares say who owes what portion of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Who paid the full amount up front.
    pub payer: ParticipantId,
    /// Total amount of the expense.
    pub amount: Decimal,
    /// Free-form label ("dinner", "fuel", ...).
    pub description: String,
    /// How the amount divides across participants. Shares are not required
    /// to sum to `amount`; the netting arithmetic takes them as recorded.
    pub shares: Vec<Share>,
}

impl Expense {
    #[must_use]
    pub fn new(payer: impl Into<ParticipantId>, amount: Decimal) -> Self {
        Self {
            payer: payer.into(),
            amount,
            description: String::new(),
            shares: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_share(mut self, participant: impl Into<ParticipantId>, amount: Decimal) -> Self {
        self.shares.push(Share {
            participant: participant.into(),
            amount,
        });
        self
    }

    /// Split `amount` evenly across `group`, rounding each share to display
    /// precision. The last participant absorbs the rounding remainder so the
    /// shares sum to `amount` exactly.
    ///
    /// # Errors
    /// Returns [`SplitfairError::EmptyGroup`] if `group` is empty.
    pub fn split_evenly(
        payer: impl Into<ParticipantId>,
        amount: Decimal,
        group: &[ParticipantId],
    ) -> Result<Self> {
        if group.is_empty() {
            return Err(SplitfairError::EmptyGroup);
        }

        let even_share = (amount / Decimal::from(group.len())).round_dp(DISPLAY_DECIMALS);
        let mut expense = Self::new(payer, amount);
        let mut allocated = Decimal::ZERO;

        for (idx, participant) in group.iter().enumerate() {
            let share = if idx + 1 == group.len() {
                amount - allocated
            } else {
                allocated += even_share;
                even_share
            };
            expense.shares.push(Share {
                participant: participant.clone(),
                amount: share,
            });
        }

        Ok(expense)
    }
}

/// Net each roster participant's contribution across the recorded expenses.
///
/// Output order follows the roster; every roster participant gets an entry,
/// including those who net to zero. Expense lines referencing identifiers
/// outside the roster are ignored.
#[must_use]
pub fn net_contributions(roster: &[ParticipantId], expenses: &[Expense]) -> Vec<Contribution> {
    roster
        .iter()
        .map(|participant| {
            let paid: Decimal = expenses
                .iter()
                .filter(|e| &e.payer == participant)
                .map(|e| e.amount)
                .sum();
            let owed: Decimal = expenses
                .iter()
                .flat_map(|e| &e.shares)
                .filter(|s| &s.participant == participant)
                .map(|s| s.amount)
                .sum();
            Contribution::new(participant.clone(), paid - owed)
        })
        .collect()
}
