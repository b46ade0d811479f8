//! Output model: directed payment instructions produced by the matcher.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;
use crate::constants::DISPLAY_DECIMALS;

/// A single directed payment from a debtor to a creditor.
///
/// Transfers are append-only: the matcher emits them in creditor-major,
/// debtor-minor order and they are never mutated afterwards. The `amount`
/// carries full `Decimal` precision; rounding to two decimal places
/// happens only when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The debtor making the payment.
    pub from: ParticipantId,
    /// The creditor receiving it.
    pub to: ParticipantId,
    /// Payment amount, full precision.
    pub amount: Decimal,
}

impl Transfer {
    #[must_use]
    pub fn new(
        from: impl Into<ParticipantId>,
        to: impl Into<ParticipantId>,
        amount: Decimal,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// The display form: `"<from> -> <to> <amount to 2 decimals>"`.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {:.2}",
            self.from,
            self.to,
            self.amount.round_dp(DISPLAY_DECIMALS)
        )
    }
}
