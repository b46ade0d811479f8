//! Input model: what each participant actually put toward the shared cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A participant's net contribution toward the pooled cost.
///
/// Supplied by the surrounding application, which computes it as
/// (sum of amounts the participant paid) − (sum of shares they owe)
/// across a group's recorded expenses. Immutable for the duration of a
/// settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Who contributed.
    pub participant: ParticipantId,
    /// How much they contributed, in the group's (single) currency unit.
    pub amount: Decimal,
}

impl Contribution {
    #[must_use]
    pub fn new(participant: impl Into<ParticipantId>, amount: Decimal) -> Self {
        Self {
            participant: participant.into(),
            amount,
        }
    }
}
