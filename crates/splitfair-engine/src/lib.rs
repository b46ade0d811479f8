//! # splitfair-engine
//!
//! **Pure deterministic settlement engine for SplitFair.**
//!
//! The engine takes each participant's net contribution toward a pooled
//! cost and produces the ordered list of peer-to-peer transfers that
//! equalizes everyone's share. It has:
//!
//! - **Zero side effects**: no DB writes, no account lookups, no I/O
//! - **Deterministic output**: same input -> same transfer sequence, every call
//! - **Order-preserving matching**: pairing follows the participants'
//!   original input order, never magnitude — the output sequence is part
//!   of the contract (and the transfer set is not guaranteed minimal)
//!
//! Data flows one way:
//!
//! ```text
//! contributions -> balances -> credit/debt worklists -> transfers
//! ```
//!
//! The [`ledger`] module additionally folds recorded expenses into the net
//! contributions the engine consumes, for callers that track who paid what.

pub mod balance;
pub mod ledger;
pub mod matcher;
pub mod residual;
pub mod settle;

pub use balance::{SplitBalances, compute_balances};
pub use ledger::{Expense, Share, net_contributions};
pub use matcher::match_entries;
pub use residual::{ResidualReport, check_residuals};
pub use settle::{Settlement, settle};
