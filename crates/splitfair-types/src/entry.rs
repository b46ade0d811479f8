//! Worklist entries consumed by the transfer matcher.
//!
//! The balance calculator splits signed balances into two ordered lists:
//! creditors (owed money by the group) and debtors (owing money to the
//! group). Each entry carries a `remaining` value that the matcher drains
//! in place toward zero. Order is the participants' original relative
//! order in the input — never sorted by magnitude, because the matcher's
//! output sequence is an observable contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

// ---------------------------------------------------------------------------
// CreditEntry
// ---------------------------------------------------------------------------

/// A participant who overpaid and is owed `remaining` by the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub participant: ParticipantId,
    /// Credit still to be absorbed by incoming transfers. Starts at
    /// `contribution − fair_share` (> 0) and is drained to zero.
    pub remaining: Decimal,
}

impl CreditEntry {
    #[must_use]
    pub fn new(participant: impl Into<ParticipantId>, remaining: Decimal) -> Self {
        Self {
            participant: participant.into(),
            remaining,
        }
    }

    /// Whether this creditor can still absorb transfers.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.remaining > Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// DebtEntry
// ---------------------------------------------------------------------------

/// A participant who underpaid and owes `remaining` to the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtEntry {
    pub participant: ParticipantId,
    /// Debt still to be paid out. Starts at `fair_share − contribution`
    /// (> 0, i.e. the balance magnitude) and is drained to zero.
    pub remaining: Decimal,
}

impl DebtEntry {
    #[must_use]
    pub fn new(participant: impl Into<ParticipantId>, remaining: Decimal) -> Self {
        Self {
            participant: participant.into(),
            remaining,
        }
    }

    /// Whether this debtor still owes anything.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.remaining > Decimal::ZERO
    }
}
