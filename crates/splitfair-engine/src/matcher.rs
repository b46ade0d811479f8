//! Greedy creditor/debtor transfer matching.
//!
//! The core pairing function: drains two ordered worklists into an
//! append-only transfer list. This is the **only** function the matcher
//! exposes — no side effects, no balance recomputation.
//!
//! ```text
//! match_entries(credits, debts) -> Vec<Transfer>
//! ```
//!
//! ## Ordering contract
//!
//! Creditors are visited in list order (outer loop); each creditor absorbs
//! debtors in list order (inner loop). Transfers therefore appear in
//! creditor-major, debtor-minor order, and callers may rely on the exact
//! sequence. Pairing is order-driven, not magnitude-driven, so the result
//! is deterministic but not guaranteed to be a minimum-cardinality set.

use rust_decimal::Decimal;

use splitfair_types::{CreditEntry, DebtEntry, Transfer};

/// Drain both worklists into an ordered transfer list.
///
/// Entries are mutated in place: every `remaining` value decreases toward
/// zero, and on a clean run both lists end fully drained (see
/// [`crate::residual::check_residuals`] for the post-run check).
///
/// ## Algorithm
///
/// For each open creditor, walk the open debtors in order:
/// - `credit ≥ debt`: the debtor pays off their whole debt to this
///   creditor and the walk continues with the next debtor;
/// - `credit < debt`: the debtor pays the creditor's whole remaining
///   credit, keeps the rest of their debt, and the walk moves on to the
///   next creditor.
///
/// Each step zeroes at least one entry, so the loop terminates after at
/// most `credits.len() × debts.len()` comparisons.
#[must_use]
pub fn match_entries(credits: &mut [CreditEntry], debts: &mut [DebtEntry]) -> Vec<Transfer> {
    let mut transfers = Vec::new();

    for credit in credits.iter_mut() {
        if !credit.is_open() {
            continue;
        }

        for debt in debts.iter_mut() {
            if !debt.is_open() {
                continue;
            }

            if credit.remaining >= debt.remaining {
                // Debtor fully pays off; creditor may absorb further debtors.
                let amount = debt.remaining;
                credit.remaining -= amount;
                debt.remaining = Decimal::ZERO;

                let transfer = Transfer::new(
                    debt.participant.clone(),
                    credit.participant.clone(),
                    amount,
                );
                tracing::debug!(
                    from = %transfer.from,
                    to = %transfer.to,
                    amount = %transfer.amount,
                    "Transfer matched"
                );
                transfers.push(transfer);

                // An exact match drains the creditor too; stop before a
                // zero-amount emission against the next open debtor.
                if !credit.is_open() {
                    break;
                }
            } else {
                // Creditor exhausted; debtor keeps the rest of their debt.
                let amount = credit.remaining;
                debt.remaining -= amount;
                credit.remaining = Decimal::ZERO;

                let transfer = Transfer::new(
                    debt.participant.clone(),
                    credit.participant.clone(),
                    amount,
                );
                tracing::debug!(
                    from = %transfer.from,
                    to = %transfer.to,
                    amount = %transfer.amount,
                    "Transfer matched (creditor drained)"
                );
                transfers.push(transfer);
                break;
            }
        }
    }

    transfers
}
