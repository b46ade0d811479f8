//! The settlement façade: one call from contributions to transfers.
//!
//! Runs the full pipeline — balance calculation, greedy matching, residual
//! check — as a single pure function. Each invocation is independent; the
//! engine keeps no state between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use splitfair_types::{Contribution, Result, Transfer};

use crate::balance::compute_balances;
use crate::matcher::match_entries;
use crate::residual::{ResidualReport, check_residuals};

/// The result of one settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Mean contribution across the group.
    pub fair_share: Decimal,
    /// Ordered transfer instructions (creditor-major, debtor-minor).
    pub transfers: Vec<Transfer>,
    /// Leftover value after the run; non-zero beyond the rounding epsilon
    /// indicates precision loss and is also logged as a warning.
    pub residual: ResidualReport,
}

impl Settlement {
    /// Transfers in display form: `"<from> -> <to> <amount to 2 decimals>"`.
    #[must_use]
    pub fn rendered_transfers(&self) -> Vec<String> {
        self.transfers.iter().map(Transfer::rendered).collect()
    }
}

/// Settle a group: compute who pays whom so that everyone ends up having
/// contributed the fair share.
///
/// Deterministic: identical input produces an identical transfer sequence
/// on every call.
///
/// # Errors
/// Returns [`splitfair_types::SplitfairError::EmptyGroup`] for an empty
/// contribution list.
pub fn settle(contributions: &[Contribution]) -> Result<Settlement> {
    let balances = compute_balances(contributions)?;
    let mut credits = balances.credits;
    let mut debts = balances.debts;

    let transfers = match_entries(&mut credits, &mut debts);

    let residual = check_residuals(&credits, &debts);
    residual.warn_if_unsettled();

    tracing::info!(
        participants = contributions.len(),
        creditors = credits.len(),
        debtors = debts.len(),
        transfers = transfers.len(),
        fair_share = %balances.fair_share,
        "Settlement complete"
    );

    Ok(Settlement {
        fair_share: balances.fair_share,
        transfers,
        residual,
    })
}
