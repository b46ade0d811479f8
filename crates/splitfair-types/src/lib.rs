//! # splitfair-types
//!
//! Shared types, errors, and constants for the **SplitFair** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Input model**: [`Contribution`]
//! - **Worklist model**: [`CreditEntry`], [`DebtEntry`]
//! - **Output model**: [`Transfer`]
//! - **Errors**: [`SplitfairError`] with `SF_ERR_` prefix codes
//! - **Constants**: display precision and the residual rounding epsilon

pub mod constants;
pub mod contribution;
pub mod entry;
pub mod error;
pub mod ids;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitfair_types::{Contribution, CreditEntry, Transfer, ...};

pub use contribution::*;
pub use entry::*;
pub use error::*;
pub use ids::*;
pub use transfer::*;

// Constants are accessed via `splitfair_types::constants::FOO`
// (not re-exported to avoid name collisions).
